use std::collections::{BTreeMap, BTreeSet};

use crate::constraints::Constraint;
use crate::error::{Error, Result};
use crate::schema::Catalog;

/// Validate internal consistency of a table catalog.
///
/// This checks:
/// - duplicate tables/columns
/// - primary key columns exist
/// - foreign key columns and referenced targets exist, with matching arity
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    let mut tables: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for table in &catalog.tables {
        if tables.contains_key(table.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate table name: {}",
                table.name
            )));
        }

        let mut columns = BTreeSet::new();
        for column in &table.columns {
            if !columns.insert(column.name.as_str()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate column name: {}.{}",
                    table.name, column.name
                )));
            }
        }

        tables.insert(table.name.as_str(), columns);
    }

    for table in &catalog.tables {
        let columns = tables.get(table.name.as_str()).ok_or_else(|| {
            Error::InvalidSchema(format!("missing table in catalog: {}", table.name))
        })?;

        for constraint in &table.constraints {
            match constraint {
                Constraint::PrimaryKey(pk) => {
                    if pk.columns.is_empty() {
                        return Err(Error::InvalidSchema(format!(
                            "empty primary key: {}",
                            table.name
                        )));
                    }
                    for column in &pk.columns {
                        if !columns.contains(column.as_str()) {
                            return Err(Error::InvalidSchema(format!(
                                "primary key column not found: {}.{}",
                                table.name, column
                            )));
                        }
                    }
                }
                Constraint::ForeignKey(fk) => {
                    for column in &fk.columns {
                        if !columns.contains(column.as_str()) {
                            return Err(Error::InvalidSchema(format!(
                                "foreign key column not found: {}.{}",
                                table.name, column
                            )));
                        }
                    }

                    let ref_columns =
                        tables.get(fk.referenced_table.as_str()).ok_or_else(|| {
                            Error::InvalidSchema(format!(
                                "referenced table not found: {}",
                                fk.referenced_table
                            ))
                        })?;

                    if fk.columns.len() != fk.referenced_columns.len() {
                        return Err(Error::InvalidSchema(format!(
                            "foreign key arity mismatch: {}({}) -> {}({})",
                            table.name,
                            fk.columns.join(", "),
                            fk.referenced_table,
                            fk.referenced_columns.join(", ")
                        )));
                    }

                    for column in &fk.referenced_columns {
                        if !ref_columns.contains(column.as_str()) {
                            return Err(Error::InvalidSchema(format!(
                                "referenced column not found: {}.{}",
                                fk.referenced_table, column
                            )));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::{ForeignKey, PrimaryKey};
    use crate::schema::{Column, Table};
    use crate::types::ColumnType;

    fn table(name: &str, columns: &[&str], constraints: Vec<Constraint>) -> Table {
        Table {
            name: name.to_string(),
            columns: columns
                .iter()
                .map(|column| Column::required(column, ColumnType::Varchar { length: 8 }))
                .collect(),
            constraints,
        }
    }

    #[test]
    fn rejects_duplicate_columns() {
        let catalog = Catalog::new(vec![table("people", &["id", "id"], Vec::new())]);
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("duplicate column name: people.id"));
    }

    #[test]
    fn rejects_missing_referenced_table() {
        let catalog = Catalog::new(vec![table(
            "transactions",
            &["id", "person"],
            vec![
                Constraint::PrimaryKey(PrimaryKey {
                    columns: vec!["id".to_string()],
                }),
                Constraint::ForeignKey(ForeignKey::single("person", "people", "id")),
            ],
        )]);
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("referenced table not found: people"));
    }

    #[test]
    fn rejects_unknown_primary_key_column() {
        let catalog = Catalog::new(vec![table(
            "jobs",
            &["job"],
            vec![Constraint::PrimaryKey(PrimaryKey {
                columns: vec!["code".to_string()],
            })],
        )]);
        assert!(matches!(
            validate_catalog(&catalog),
            Err(Error::InvalidSchema(_))
        ));
    }
}
