use demux_setup::argparse::Cli;
use demux_setup::run::{self, Outcome};
use demux_setup::utils::error::AppError;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn run_cli(args: &[&str]) -> Result<Outcome, AppError> {
    let invocation = Cli::invocation_from(args.iter().copied()).expect("arguments parse");
    run::execute(invocation)
}

fn init_pool_a(store: &Path, out: &Path) -> Outcome {
    run_cli(&[
        "demux-setup",
        "--setup-codename", "poolA",
        "-INIT",
        "--ref-human-gex", "/ref/hg38",
        "--probeset-human-transcriptome", "/ref/probes.csv",
        "--output-dir", out.to_str().unwrap(),
        "--init-dir", store.to_str().unwrap(),
    ])
    .unwrap()
}

fn gen_pool1(store: &Path) -> Result<Outcome, AppError> {
    run_cli(&[
        "demux-setup",
        "--setup-codename", "poolA",
        "-GEN",
        "--sample_pool_name", "Pool1",
        "--fastq-path", "/data/fastq",
        "--sample-id-BC001", "S1",
        "--sample-id-BC002", "S2",
        "--sample-id-BC003", "S3",
        "--sample-id-BC004", "S4",
        "--init-dir", store.to_str().unwrap(),
    ])
}

#[test]
fn init_stores_flat_record() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("init_files");
    let out = dir.path().join("out");

    let outcome = init_pool_a(&store, &out);
    assert_eq!(outcome, Outcome::Initialised(store.join("poolA.json")));
    assert!(out.is_dir());

    let text = fs::read_to_string(store.join("poolA.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "ref_human_gex": "/ref/hg38",
            "probeset_human_transcriptome": "/ref/probes.csv",
            "write_bam": false,
            "output_dir": out.to_str().unwrap(),
        })
    );
}

#[test]
fn gen_renders_stored_setup() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("init_files");
    let out = dir.path().join("out");
    init_pool_a(&store, &out);

    let target = out.join("demultiplex_setup_Pool1.csv");
    assert_eq!(gen_pool1(&store).unwrap(), Outcome::Written(target.clone()));

    let expected = "\
[gene-expression],,
reference,/ref/hg38,
probe-set,/ref/probes.csv,
create-bam,false,
,,
[libraries],,
fastq_id,fastqs,feature_types
Pool1,/data/fastq,Gene Expression
,,
[samples],,
sample_id,probe_barcode_ids,description
S1,BC001,S1
S2,BC002,S2
S3,BC003,S3
S4,BC004,S4
";
    assert_eq!(fs::read_to_string(&target).unwrap(), expected);

    // a second run leaves the first file untouched
    assert_eq!(gen_pool1(&store).unwrap(), Outcome::Skipped(target.clone()));
    assert_eq!(fs::read_to_string(&target).unwrap(), expected);
}

#[test]
fn gen_without_init_fails() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("init_files");

    let err = gen_pool1(&store).unwrap_err();
    assert!(matches!(err, AppError::SetupNotFound { .. }));
    let message = err.to_string();
    assert!(message.starts_with("No setup stored under codename `poolA`"));
    assert!(message.ends_with("; run -INIT first"));
}

#[test]
fn write_bam_flag_reaches_csv() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("init_files");
    let out = dir.path().join("out");

    run_cli(&[
        "demux-setup",
        "--setup-codename", "bam-round",
        "-INIT",
        "--ref-human-gex", "/ref/hg38",
        "--probeset-human-transcriptome", "/ref/probes.csv",
        "--write-bam-files",
        "--output-dir", out.to_str().unwrap(),
        "--init-dir", store.to_str().unwrap(),
    ])
    .unwrap();

    run_cli(&[
        "demux-setup",
        "--setup-codename", "bam-round",
        "-GEN",
        "--sample-pool-name", "Pool9",
        "--fastq-path", "/fq",
        "--init-dir", store.to_str().unwrap(),
    ])
    .unwrap();

    let text = fs::read_to_string(out.join("demultiplex_setup_Pool9.csv")).unwrap();
    assert!(text.contains("create-bam,true,\n"));
    assert_eq!(text.lines().count(), 16);
}

#[test]
fn no_mode_is_rejected_before_side_effects() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("init_files");

    let result = run_cli(&[
        "demux-setup",
        "--setup-codename", "poolA",
        "--init-dir", store.to_str().unwrap(),
    ]);
    let err = result.unwrap_err();
    assert!(matches!(err, AppError::NoModeSelected));
    assert_eq!(err.to_string(), "At least one mode (INIT | GEN) must be chosen");
    assert!(!store.exists());
}

#[test]
fn bare_invocation_shows_help() {
    assert_eq!(run_cli(&["demux-setup"]).unwrap(), Outcome::Help);
}
