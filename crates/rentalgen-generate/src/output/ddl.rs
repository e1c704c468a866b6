use rentalgen_core::{Catalog, Error as CoreError, build_fk_graph_report, validate_catalog};

use crate::errors::GenerationError;

/// Render every table's `CREATE TABLE` statement, referenced tables first.
pub fn render_schema_sql(catalog: &Catalog) -> Result<String, GenerationError> {
    validate_catalog(catalog)?;

    let report = build_fk_graph_report(catalog);
    let order = report.topo_order.ok_or_else(|| {
        CoreError::InvalidSchema(format!(
            "foreign key cycle between: {}",
            report.cycle.unwrap_or_default().join(", ")
        ))
    })?;

    let mut statements = Vec::with_capacity(order.len());
    for name in &order {
        let table = catalog.table(name).ok_or_else(|| {
            CoreError::InvalidSchema(format!("referenced table not found: {name}"))
        })?;
        statements.push(table.to_ddl());
    }

    let mut sql = statements.join("\n\n");
    sql.push('\n');
    Ok(sql)
}
