use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constraints::{Constraint, ForeignKey, PrimaryKey};
use crate::types::ColumnType;

/// Table catalog for a dataset, one table per entity collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    /// Contract version for this catalog format.
    pub schema_version: String,
    /// Tables in entity order.
    pub tables: Vec<Table>,
}

impl Catalog {
    pub fn new(tables: Vec<Table>) -> Self {
        Self {
            schema_version: crate::SCHEMA_VERSION.to_string(),
            tables,
        }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}

/// A storage table backing one entity collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub constraints: Vec<Constraint>,
}

/// Column metadata for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub is_nullable: bool,
}

impl Column {
    pub fn required(name: &str, column_type: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            column_type,
            is_nullable: false,
        }
    }

    pub fn nullable(name: &str, column_type: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            column_type,
            is_nullable: true,
        }
    }
}

impl Table {
    pub fn primary_key(&self) -> Option<&PrimaryKey> {
        self.constraints.iter().find_map(|constraint| match constraint {
            Constraint::PrimaryKey(pk) => Some(pk),
            Constraint::ForeignKey(_) => None,
        })
    }

    pub fn foreign_keys(&self) -> impl Iterator<Item = &ForeignKey> {
        self.constraints.iter().filter_map(|constraint| match constraint {
            Constraint::ForeignKey(fk) => Some(fk),
            Constraint::PrimaryKey(_) => None,
        })
    }

    /// Render a `CREATE TABLE` statement for this table.
    ///
    /// Single-column primary keys are declared inline on the column; composite
    /// keys and foreign keys follow the column list as table constraints.
    pub fn to_ddl(&self) -> String {
        let inline_pk = self
            .primary_key()
            .filter(|pk| pk.columns.len() == 1)
            .and_then(|pk| pk.columns.first());

        let mut lines = Vec::with_capacity(self.columns.len() + self.constraints.len());
        for column in &self.columns {
            let mut line = format!("    {} {}", column.name, column.column_type);
            if !column.is_nullable {
                line.push_str(" NOT NULL");
            }
            if inline_pk == Some(&column.name) {
                line.push_str(" PRIMARY KEY");
            }
            lines.push(line);
        }

        if let Some(pk) = self.primary_key()
            && pk.columns.len() > 1
        {
            lines.push(format!("    PRIMARY KEY ({})", pk.columns.join(", ")));
        }

        for fk in self.foreign_keys() {
            lines.push(format!(
                "    FOREIGN KEY ({}) REFERENCES {}({})",
                fk.columns.join(", "),
                fk.referenced_table,
                fk.referenced_columns.join(", ")
            ));
        }

        format!("CREATE TABLE {} (\n{}\n);", self.name, lines.join(",\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_composite_primary_key_as_table_constraint() {
        let table = Table {
            name: "pairs".to_string(),
            columns: vec![
                Column::required("left", ColumnType::Char { length: 4 }),
                Column::required("right", ColumnType::Char { length: 4 }),
            ],
            constraints: vec![Constraint::PrimaryKey(PrimaryKey {
                columns: vec!["left".to_string(), "right".to_string()],
            })],
        };

        let ddl = table.to_ddl();
        assert_eq!(
            ddl,
            "CREATE TABLE pairs (\n    left CHAR(4) NOT NULL,\n    right CHAR(4) NOT NULL,\n    PRIMARY KEY (left, right)\n);"
        );
    }

    #[test]
    fn nullable_columns_omit_not_null() {
        let table = Table {
            name: "notes".to_string(),
            columns: vec![Column::nullable("body", ColumnType::Varchar { length: 50 })],
            constraints: Vec::new(),
        };
        assert_eq!(table.to_ddl(), "CREATE TABLE notes (\n    body VARCHAR(50)\n);");
    }
}
