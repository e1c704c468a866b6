use std::fs;
use std::path::PathBuf;

use rentalgen_core::{Address, Job, Person, RentalDataset, Transaction};
use rentalgen_eval::{AgeBucket, EvalError, render_report, summarize, summarize_run};
use rentalgen_generate::{DatasetCounts, GenerateOptions, GenerationEngine};

const MAIN_ST: &str = "1 Main St\nSpringfield, IL 62701";
const OAK_AVE: &str = "2 Oak Ave\nShelbyville, IL 62565";

fn sample_dataset() -> RentalDataset {
    let people = vec![
        Person::new("P-000000", "Mary Smith", 30, false),
        Person::new("P-000001", "John Brown", 30, true),
        Person::new("P-000002", "Linda Jones", 41, false),
    ];
    let addresses = vec![Address::new(MAIN_ST), Address::new(OAK_AVE)];
    let jobs = vec![Job::new("Clerk"), Job::new("Clerk"), Job::new("Chef")];
    let transactions = vec![
        Transaction::new("T-000000", "Clerk", "P-000000", MAIN_ST),
        Transaction::new("T-000001", "Chef", "P-000001", MAIN_ST),
        Transaction::new("T-000002", "Clerk", "P-000002", OAK_AVE),
        Transaction::new("T-000003", "Chef", "P-999999", MAIN_ST),
    ];
    RentalDataset::new(people, addresses, jobs, transactions)
}

#[test]
fn total_vs_unique_counts_fields() {
    let summary = summarize(&sample_dataset());
    let fields: Vec<(&str, u64, u64)> = summary
        .total_vs_unique
        .iter()
        .map(|counts| (counts.field.as_str(), counts.total, counts.unique))
        .collect();
    assert_eq!(fields, vec![("Person.age", 3, 2), ("Job.job", 3, 2)]);
}

#[test]
fn primary_keys_count_repeats_per_collection() {
    let mut dataset = sample_dataset();
    dataset.addresses.push(Address::new(MAIN_ST));
    let summary = summarize(&dataset);
    let keys: Vec<(&str, u64, u64)> = summary
        .primary_keys
        .iter()
        .map(|counts| (counts.field.as_str(), counts.total, counts.unique))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("people.id", 3, 3),
            ("address.address", 3, 2),
            ("jobs.job", 3, 2),
            ("transactions.id", 4, 4),
        ]
    );
}

#[test]
fn report_flags_repeated_addresses() {
    let mut dataset = sample_dataset();
    dataset.addresses.push(Address::new(OAK_AVE));
    dataset.jobs.truncate(1);
    dataset.transactions.truncate(1);
    let dir = temp_out_dir("repeated_addresses");
    rentalgen_generate::write_dataset(&dir, &dataset).expect("write dataset");

    let report = render_report(&summarize_run(&dir).expect("summarize"));
    assert!(report.contains("- address.address repeats 1 value(s)"));
    assert!(!report.contains("jobs.job repeats"));
    assert!(!report.contains("no issues detected"));
}

#[test]
fn people_per_age_is_ascending() {
    let summary = summarize(&sample_dataset());
    assert_eq!(
        summary.people_per_age,
        vec![
            AgeBucket { age: 30, people: 2 },
            AgeBucket { age: 41, people: 1 },
        ]
    );
}

#[test]
fn transactions_per_address_carry_shares() {
    let summary = summarize(&sample_dataset());
    let shares = &summary.transactions_per_address;
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].address, MAIN_ST);
    assert_eq!(shares[0].transactions, 3);
    assert!((shares[0].percent - 75.0).abs() < 1e-9);
    assert_eq!(shares[1].address, OAK_AVE);
    assert!((shares[1].percent - 25.0).abs() < 1e-9);
}

#[test]
fn integrity_counts_dangling_references_per_field() {
    let summary = summarize(&sample_dataset());
    let integrity = &summary.integrity;
    assert_eq!(integrity.checked, 12);
    assert_eq!(integrity.total_dangling(), 1);
    assert_eq!(integrity.dangling.get("person"), Some(&1));
    assert_eq!(integrity.dangling.get("job"), Some(&0));
    assert_eq!(integrity.dangling.get("address"), Some(&0));
    assert_eq!(integrity.examples, vec!["T-000003.person=P-999999"]);
}

#[test]
fn empty_transactions_produce_empty_pie() {
    let mut dataset = sample_dataset();
    dataset.transactions.clear();
    let summary = summarize(&dataset);
    assert!(summary.transactions_per_address.is_empty());
    assert_eq!(summary.integrity.checked, 0);
}

#[test]
fn generated_run_summarizes_from_disk() {
    let mut options = GenerateOptions::default();
    options.out_dir = temp_out_dir("summary_run");
    options.seed = Some(5);
    let result = GenerationEngine::new(options)
        .run(&DatasetCounts::new(20, 4, 3, 40))
        .expect("run generation");

    let summary = summarize_run(&result.run_dir).expect("summarize run");
    assert_eq!(summary.seed, Some(5));
    assert_eq!(summary.run_id.as_deref(), Some(result.report.run_id.as_str()));
    assert_eq!(summary.dataset.integrity.total_dangling(), 0);
    let rows: Vec<u64> = summary
        .dataset
        .collections
        .iter()
        .map(|collection| collection.rows)
        .collect();
    assert_eq!(rows, vec![20, 4, 3, 40]);
    let pie_total: u64 = summary
        .dataset
        .transactions_per_address
        .iter()
        .map(|share| share.transactions)
        .sum();
    assert_eq!(pie_total, 40);
    assert_eq!(summary.schema.counts.tables, 4);
}

#[test]
fn summarize_run_requires_existing_directory() {
    let missing = std::env::temp_dir().join(format!("rentalgen_missing_{}", uuid::Uuid::new_v4()));
    let err = summarize_run(&missing).unwrap_err();
    assert!(matches!(err, EvalError::MissingRun(_)));
}

#[test]
fn report_renders_every_chart() {
    let dataset = sample_dataset();
    let dir = temp_out_dir("report");
    rentalgen_generate::write_dataset(&dir, &dataset).expect("write dataset");
    let summary = summarize_run(&dir).expect("summarize");
    let report = render_report(&summary);

    assert!(report.starts_with("# Rentalgen Dataset Summary"));
    assert!(report.contains("- run_id: -"));
    assert!(report.contains("- load order: address -> jobs -> people -> transactions"));
    assert!(report.contains("| Person.age | 3 | 2 |"));
    assert!(report.contains("| 30 | 2 |"));
    assert!(report.contains("| 1 Main St / Springfield, IL 62701 | 3 | 75.0% |"));
    assert!(report.contains("| person | 1 |"));
    assert!(report.contains("- T-000003.person=P-999999"));
    assert!(report.contains("regenerate or repair"));
    assert!(report.contains("| jobs.job | 3 | 2 |"));
    assert!(report.contains("- jobs.job repeats 1 value(s)"));
    assert!(!report.contains("address.address repeats"));
    assert_eq!(report, render_report(&summary));
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("rentalgen_eval_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}
