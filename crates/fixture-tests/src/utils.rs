#![allow(dead_code)]

use fixture::EngineKind;

/// Two rows in two tables. Values are written the way both engines print
/// them back.
pub const USERS_ORDERS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<dataset>
    <fx_users id="1" name="alice" created_at="2024-03-01 10:00:00"/>
    <fx_orders id="10" user_id="1" total="12.50"/>
</dataset>"#;

/// Three users in insertion order 2, 3, 1.
pub const USERS_XML: &str = r#"<?xml version="1.0"?>
<dataset>
    <fx_users id="2" name="bob" created_at="2024-03-02 11:00:00"/>
    <fx_users id="3" name="carol" created_at="2024-03-03 12:00:00"/>
    <fx_users id="1" name="alice" created_at="2024-03-01 10:00:00"/>
</dataset>"#;

/// An order without a note, which reads back as an empty string.
pub const ORDER_WITHOUT_NOTE_XML: &str = r#"<?xml version="1.0"?>
<dataset>
    <fx_orders id="11" user_id="1" total="3.00"/>
</dataset>"#;

pub const DROP_TABLES: [&str; 2] = [
    "DROP TABLE IF EXISTS fx_orders",
    "DROP TABLE IF EXISTS fx_users",
];

pub fn create_tables(kind: EngineKind) -> [&'static str; 2] {
    match kind {
        EngineKind::MySql => [
            "CREATE TABLE fx_users (
                id INT PRIMARY KEY,
                name VARCHAR(64) NOT NULL,
                created_at DATETIME NOT NULL
            )",
            "CREATE TABLE fx_orders (
                id INT PRIMARY KEY,
                user_id INT NOT NULL,
                total DECIMAL(10, 2) NOT NULL,
                note VARCHAR(255) NULL
            )",
        ],
        EngineKind::Postgres => [
            "CREATE TABLE fx_users (
                id INT PRIMARY KEY,
                name VARCHAR(64) NOT NULL,
                created_at TIMESTAMP NOT NULL
            )",
            "CREATE TABLE fx_orders (
                id INT PRIMARY KEY,
                user_id INT NOT NULL,
                total NUMERIC(10, 2) NOT NULL,
                note TEXT NULL
            )",
        ],
    }
}

/// Postgres-only table exercising typed parameter binding.
pub const PG_TYPED_DDL: [&str; 3] = [
    "DROP TABLE IF EXISTS fx_typed",
    "DROP TYPE IF EXISTS fx_mood",
    "CREATE TYPE fx_mood AS ENUM ('sad', 'ok', 'happy')",
];

pub const PG_TYPED_TABLE: &str = "CREATE TABLE fx_typed (
    id BIGINT PRIMARY KEY,
    active BOOLEAN NOT NULL,
    ref_id UUID NOT NULL,
    payload JSON NOT NULL,
    born DATE NOT NULL,
    mood fx_mood NOT NULL,
    local_at TIMESTAMP NOT NULL,
    seen_at TIMESTAMPTZ NOT NULL,
    amount NUMERIC NOT NULL,
    span INTERVAL NOT NULL,
    addr INET NOT NULL,
    tags TEXT[] NOT NULL
)";

/// Values whose stored form depends on the server parsing the literal
/// itself: an offset on a `timestamp`, a naive `timestamptz`, more digits
/// than a 96-bit decimal holds, and types without a fixed client mapping.
pub const PG_TYPED_XML: &str = r#"<?xml version="1.0"?>
<dataset>
    <fx_typed id="1" active="t" ref_id="67e55044-10b1-426f-9247-bb680e5fe0c8"
        payload="{&quot;b&quot;: 1.0000000000000000001, &quot;a&quot;: 2}"
        born="1990-05-17" mood="happy"
        local_at="2024-03-01T10:00:00+02:00" seen_at="2024-03-01 10:00:00"
        amount="0.123456789012345678901234567890123" span="1 day"
        addr="10.0.0.1/8" tags="{red,green}"/>
</dataset>"#;
