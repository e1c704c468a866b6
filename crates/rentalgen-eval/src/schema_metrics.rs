use serde::{Deserialize, Serialize};

use rentalgen_core::{Catalog, Constraint, build_fk_graph_report};

/// Metrics for a table catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaMetrics {
    pub schema_version: String,
    pub counts: SchemaCounts,
    pub coverage: CoverageMetrics,
    pub fk_graph: FkGraphMetrics,
}

/// Count summary for catalog objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaCounts {
    pub tables: usize,
    pub columns: usize,
    pub primary_keys: usize,
    pub foreign_keys: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageMetrics {
    pub tables_with_pk_pct: f64,
    pub tables_with_fk_pct: f64,
    pub columns_not_null_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FkGraphMetrics {
    pub edges: usize,
    pub has_cycle: bool,
    pub cycle: Option<Vec<String>>,
    pub topo_order: Option<Vec<String>>,
}

/// Collect metrics for a catalog.
pub fn collect_schema_metrics(catalog: &Catalog) -> SchemaMetrics {
    let mut counts = SchemaCounts {
        tables: catalog.tables.len(),
        columns: 0,
        primary_keys: 0,
        foreign_keys: 0,
    };
    let mut tables_with_pk = 0usize;
    let mut tables_with_fk = 0usize;
    let mut not_null_columns = 0usize;

    for table in &catalog.tables {
        counts.columns += table.columns.len();
        not_null_columns += table.columns.iter().filter(|col| !col.is_nullable).count();

        let mut has_pk = false;
        let mut has_fk = false;
        for constraint in &table.constraints {
            match constraint {
                Constraint::PrimaryKey(_) => {
                    counts.primary_keys += 1;
                    has_pk = true;
                }
                Constraint::ForeignKey(_) => {
                    counts.foreign_keys += 1;
                    has_fk = true;
                }
            }
        }
        tables_with_pk += usize::from(has_pk);
        tables_with_fk += usize::from(has_fk);
    }

    let coverage = CoverageMetrics {
        tables_with_pk_pct: ratio(tables_with_pk, counts.tables),
        tables_with_fk_pct: ratio(tables_with_fk, counts.tables),
        columns_not_null_pct: ratio(not_null_columns, counts.columns),
    };

    let graph_report = build_fk_graph_report(catalog);
    let fk_graph = FkGraphMetrics {
        edges: graph_report.summary.edges,
        has_cycle: graph_report.cycle.is_some(),
        cycle: graph_report.cycle,
        topo_order: graph_report.topo_order,
    };

    SchemaMetrics {
        schema_version: catalog.schema_version.clone(),
        counts,
        coverage,
        fk_graph,
    }
}

fn ratio(part: usize, total: usize) -> f64 {
    if total > 0 {
        part as f64 / total as f64
    } else {
        0.0
    }
}
