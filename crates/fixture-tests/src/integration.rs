#[cfg(test)]
mod tests {
    use crate::{
        execute, lock_db, tester, url_for,
        utils::{
            DROP_TABLES, ORDER_WITHOUT_NOTE_XML, PG_TYPED_DDL, PG_TYPED_TABLE, PG_TYPED_XML,
            USERS_ORDERS_XML, USERS_XML, create_tables,
        },
    };
    use fixture::{
        ClearMethod, DbError, EngineKind, Image, ImageQuery, SortDirection, Tester,
    };
    use tokio::sync::MutexGuard;
    use tracing_test::traced_test;

    type DbGuard = MutexGuard<'static, ()>;

    /// Recreates the fixture tables and returns a ready tester, or `None`
    /// when no database is configured for `kind`.
    async fn prepare(kind: EngineKind) -> Option<(DbGuard, Tester)> {
        let url = url_for(kind)?;
        let guard = lock_db().await;
        execute(kind, &url, &DROP_TABLES).await;
        execute(kind, &url, &create_tables(kind)).await;
        Some((guard, tester(kind, &url).await))
    }

    async fn install_and_read_back(kind: EngineKind) {
        let Some((_guard, mut tester)) = prepare(kind).await else {
            return;
        };

        let image = tester
            .image_manager()
            .load_image(USERS_ORDERS_XML)
            .unwrap();
        let installer = tester.installer();
        installer.install_image(&image).await.unwrap();

        assert_eq!(installer.table_rows_count("fx_users").await.unwrap(), 1);
        assert_eq!(installer.table_rows_count("fx_orders").await.unwrap(), 1);

        let users = installer
            .table_image("fx_users", &ImageQuery::all())
            .await
            .unwrap();
        let orders = installer
            .table_image(
                "fx_orders",
                &ImageQuery::all().columns(["id", "user_id", "total"]),
            )
            .await
            .unwrap();

        let actual: Image = users.into_iter().chain(orders).collect();
        let diffs = tester.image_manager().images_diff(&image, &actual);
        assert!(diffs.is_empty(), "unexpected diff: {diffs:#?}");
    }

    async fn reinstall_is_idempotent(kind: EngineKind) {
        let Some((_guard, mut tester)) = prepare(kind).await else {
            return;
        };

        let image = tester
            .image_manager()
            .load_image(USERS_ORDERS_XML)
            .unwrap();
        let installer = tester.installer();
        installer.install_image(&image).await.unwrap();
        installer.install_image(&image).await.unwrap();

        assert_eq!(installer.table_rows_count("fx_users").await.unwrap(), 1);
    }

    async fn ordered_read_back(kind: EngineKind) {
        let Some((_guard, mut tester)) = prepare(kind).await else {
            return;
        };

        let image = tester.image_manager().load_image(USERS_XML).unwrap();
        let installer = tester.installer();
        installer.install_image(&image).await.unwrap();

        let query = ImageQuery::all()
            .columns(["id", "name"])
            .order_by("id", SortDirection::Desc);
        let actual = installer.table_image("fx_users", &query).await.unwrap();

        let ids: Vec<_> = actual.iter().filter_map(|row| row.get("id")).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
        assert_eq!(actual[0].columns().collect::<Vec<_>>(), vec!["id", "name"]);

        let by_name = ImageQuery::all().order_by("name", SortDirection::Asc);
        let actual = installer.table_image("fx_users", &by_name).await.unwrap();
        assert_eq!(actual[0].get("name"), Some("alice"));
        assert_eq!(actual[2].get("name"), Some("carol"));
    }

    async fn null_reads_back_as_empty_string(kind: EngineKind) {
        let Some((_guard, mut tester)) = prepare(kind).await else {
            return;
        };

        let image = tester
            .image_manager()
            .load_image(ORDER_WITHOUT_NOTE_XML)
            .unwrap();
        let installer = tester.installer();
        installer.install_image(&image).await.unwrap();

        let actual = installer
            .table_image("fx_orders", &ImageQuery::all())
            .await
            .unwrap();
        assert_eq!(actual[0].get("note"), Some(""));
        assert_eq!(actual[0].get("total"), Some("3.00"));
    }

    async fn rollback_discards_install(kind: EngineKind) {
        let Some((_guard, mut tester)) = prepare(kind).await else {
            return;
        };

        let image = tester
            .image_manager()
            .load_image(USERS_ORDERS_XML)
            .unwrap();
        let installer = tester.installer();

        installer.with_transaction().await.unwrap();
        assert!(matches!(
            installer.with_transaction().await,
            Err(DbError::TransactionAlreadyActive)
        ));

        installer.install_image(&image).await.unwrap();
        assert_eq!(installer.table_rows_count("fx_users").await.unwrap(), 1);

        installer.rollback().await.unwrap();
        assert_eq!(installer.table_rows_count("fx_users").await.unwrap(), 0);
        assert!(matches!(
            installer.rollback().await,
            Err(DbError::NoActiveTransaction)
        ));
    }

    async fn failed_insert_aborts(kind: EngineKind) {
        let Some((_guard, mut tester)) = prepare(kind).await else {
            return;
        };

        let image = tester
            .image_manager()
            .load_image(
                r#"<?xml version="1.0"?>
<dataset>
    <fx_users id="1" name="alice" created_at="2024-03-01 10:00:00"/>
    <fx_users id="1" name="again" created_at="2024-03-01 10:00:00"/>
    <fx_users id="2" name="never" created_at="2024-03-01 10:00:00"/>
</dataset>"#,
            )
            .unwrap();
        let installer = tester.installer();

        assert!(installer.install_image(&image).await.is_err());
        assert_eq!(installer.table_rows_count("fx_users").await.unwrap(), 1);
    }

    #[traced_test]
    #[tokio::test]
    async fn mysql_install_and_read_back() {
        install_and_read_back(EngineKind::MySql).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn pg_install_and_read_back() {
        install_and_read_back(EngineKind::Postgres).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn mysql_reinstall_is_idempotent() {
        reinstall_is_idempotent(EngineKind::MySql).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn pg_reinstall_is_idempotent() {
        reinstall_is_idempotent(EngineKind::Postgres).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn mysql_ordered_read_back() {
        ordered_read_back(EngineKind::MySql).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn pg_ordered_read_back() {
        ordered_read_back(EngineKind::Postgres).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn mysql_null_reads_back_as_empty_string() {
        null_reads_back_as_empty_string(EngineKind::MySql).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn pg_null_reads_back_as_empty_string() {
        null_reads_back_as_empty_string(EngineKind::Postgres).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn mysql_rollback_discards_install() {
        rollback_discards_install(EngineKind::MySql).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn pg_rollback_discards_install() {
        rollback_discards_install(EngineKind::Postgres).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn mysql_failed_insert_aborts() {
        failed_insert_aborts(EngineKind::MySql).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn pg_failed_insert_aborts() {
        failed_insert_aborts(EngineKind::Postgres).await;
    }

    #[traced_test]
    #[tokio::test]
    async fn pg_typed_columns_and_schema_prefix() {
        let Some(url) = url_for(EngineKind::Postgres) else {
            return;
        };
        let _guard = lock_db().await;
        execute(EngineKind::Postgres, &url, &PG_TYPED_DDL).await;
        execute(EngineKind::Postgres, &url, &[PG_TYPED_TABLE]).await;

        let mut tester = tester(EngineKind::Postgres, &url).await;
        let image = tester.image_manager().load_image(PG_TYPED_XML).unwrap();
        let installer = tester.installer();
        installer.set_clear_method(ClearMethod::Truncate);
        installer.install_image(&image).await.unwrap();

        let query = ImageQuery::all().columns([
            "id", "active", "ref_id", "payload", "born", "mood", "local_at", "seen_at",
            "amount", "span", "addr", "tags",
        ]);
        let actual = installer.table_image("public.fx_typed", &query).await.unwrap();

        assert_eq!(actual.len(), 1);
        let row = &actual[0];
        assert_eq!(row.table, "public.fx_typed");
        assert_eq!(row.get("active"), Some("t"));
        assert_eq!(row.get("ref_id"), Some("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert_eq!(
            row.get("payload"),
            Some(r#"{"b": 1.0000000000000000001, "a": 2}"#)
        );
        assert_eq!(row.get("born"), Some("1990-05-17"));
        assert_eq!(row.get("mood"), Some("happy"));
        // timestamp ignores the offset; timestamptz reads a naive value in
        // the session time zone and prints it back in the same zone
        assert_eq!(row.get("local_at"), Some("2024-03-01 10:00:00"));
        assert!(
            row.get("seen_at").unwrap().starts_with("2024-03-01 10:00:00"),
            "{:?}",
            row.get("seen_at")
        );
        assert_eq!(row.get("amount"), Some("0.123456789012345678901234567890123"));
        assert_eq!(row.get("span"), Some("1 day"));
        assert_eq!(row.get("addr"), Some("10.0.0.1/8"));
        assert_eq!(row.get("tags"), Some("{red,green}"));
    }

    #[traced_test]
    #[tokio::test]
    async fn pg_invalid_value_is_rejected_by_server() {
        let Some((_guard, mut tester)) = prepare(EngineKind::Postgres).await else {
            return;
        };

        let image = tester
            .image_manager()
            .load_image(
                r#"<?xml version="1.0"?>
<dataset>
    <fx_users id="x" name="a" created_at="2024-03-01 10:00:00"/>
</dataset>"#,
            )
            .unwrap();
        let installer = tester.installer();
        let err = installer.install_image(&image).await.unwrap_err();
        assert!(matches!(err, DbError::Postgres(_)), "{err:?}");
        assert_eq!(installer.table_rows_count("fx_users").await.unwrap(), 0);
    }
}
