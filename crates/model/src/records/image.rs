use crate::records::row::Row;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered dataset snapshot.
///
/// Position matters when two images are compared; installation only cares
/// about the set of tables referenced and the rows themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Image(Vec<Row>);

impl Image {
    pub fn new() -> Self {
        Image(Vec::new())
    }

    pub fn push(&mut self, row: Row) {
        self.0.push(row);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Row> {
        self.0.iter_mut()
    }

    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    /// Distinct table names in the order they first appear.
    pub fn tables(&self) -> Vec<&str> {
        self.0
            .iter()
            .map(|row| row.table.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.0
    }
}

impl From<Vec<Row>> for Image {
    fn from(rows: Vec<Row>) -> Self {
        Image(rows)
    }
}

impl FromIterator<Row> for Image {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Image(iter.into_iter().collect())
    }
}

impl IntoIterator for Image {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Image {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for Image {
    type Output = Row;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
