use super::setup_store::SetupRecord;

use std::fmt;

/// Probe barcodes with a dedicated CLI flag
pub const FIXED_BARCODES: [&str; 4] = ["BC001", "BC002", "BC003", "BC004"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeBarcode(String);

impl ProbeBarcode {
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self(label.into())
    }

    pub fn fixed() -> impl Iterator<Item = ProbeBarcode> {
        FIXED_BARCODES.into_iter().map(ProbeBarcode::new)
    }

    #[inline]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ProbeBarcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the `[samples]` section. An absent id leaves the row blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sample {
    pub id: Option<String>,
    pub barcode: ProbeBarcode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureType {
    GeneExpression,
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureType::GeneExpression => f.write_str("Gene Expression"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Library {
    pub fastq_id: String,
    pub fastqs: String,
    pub feature_type: FeatureType,
}

/// Per-pool input to GEN; never persisted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolRequest {
    pub pool_name: String,
    pub fastq_path: String,
    pub samples: Vec<Sample>,
}

impl PoolRequest {
    /// Pairs the given ids with `BC001`..`BC004` in order
    pub fn with_fixed_barcodes(
        pool_name: String,
        fastq_path: String,
        ids: [Option<String>; 4],
    ) -> Self {
        let samples = ids
            .into_iter()
            .zip(ProbeBarcode::fixed())
            .map(|(id, barcode)| Sample { id, barcode })
            .collect();
        Self { pool_name, fastq_path, samples }
    }
}

/// The three-section multiplex config consumed by `cellranger multi`
#[derive(Clone, Debug)]
pub struct SampleSheet {
    reference: String,
    probe_set: String,
    create_bam: bool,
    libraries: Vec<Library>,
    samples: Vec<Sample>,
}

impl SampleSheet {
    pub fn new(setup: &SetupRecord, pool: PoolRequest) -> Self {
        let library = Library {
            fastq_id: pool.pool_name,
            fastqs: pool.fastq_path,
            feature_type: FeatureType::GeneExpression,
        };
        Self {
            reference: setup.ref_human_gex.clone(),
            probe_set: setup.probeset_human_transcriptome.clone(),
            create_bam: setup.write_bam,
            libraries: vec![library],
            samples: pool.samples,
        }
    }

    pub fn file_name(pool_name: &str) -> String {
        format!("demultiplex_setup_{pool_name}.csv")
    }
}

impl fmt::Display for SampleSheet {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(out, "[gene-expression],,")?;
        writeln!(out, "reference,{},", self.reference)?;
        writeln!(out, "probe-set,{},", self.probe_set)?;
        writeln!(out, "create-bam,{},", self.create_bam)?;
        writeln!(out, ",,")?;

        writeln!(out, "[libraries],,")?;
        writeln!(out, "fastq_id,fastqs,feature_types")?;
        for lib in &self.libraries {
            writeln!(out, "{},{},{}", lib.fastq_id, lib.fastqs, lib.feature_type)?;
        }
        writeln!(out, ",,")?;

        writeln!(out, "[samples],,")?;
        writeln!(out, "sample_id,probe_barcode_ids,description")?;
        for sample in &self.samples {
            let id = sample.id.as_deref().unwrap_or("");
            writeln!(out, "{id},{},{id}", sample.barcode)?;
        }
        Ok(())
    }
}
