use envelope::{EncryptionMetadata, cipher, compress};

use super::config::Effective;
use super::error::GenError;
use super::record::batch_contents;

const METADATA_EXTENSION: &str = "json.encryption.json";
const PAYLOAD_EXTENSION: &str = "json.gz.enc";

/// Write all requested batch file pairs, strictly in ascending batch order.
/// The first failed write aborts the run; files already written stay behind.
pub fn run(args: &Effective) -> Result<(), GenError> {
    for batch_index in 0..args.number_of_files {
        write_batch(args, batch_index)?;
    }

    tracing::info!(
        topic = %args.topic.file_stem(),
        batches = args.number_of_files,
        records_per_file = args.records_per_file,
        directory = %args.output_directory,
        "fixture corpus written"
    );
    Ok(())
}

fn write_batch(args: &Effective, batch_index: usize) -> Result<(), GenError> {
    let batch = batch_contents(
        &args.topic.database,
        &args.topic.collection,
        batch_index,
        args.records_per_file,
    )?;
    let body = compress::gzip(batch.as_bytes())?;
    let encrypted = cipher::encrypt(cipher::PLAINTEXT_DATA_KEY, &body)?;
    let sidecar = EncryptionMetadata::for_iv(encrypted.initialisation_vector).to_pretty_json()?;

    let stem = args.topic.file_stem();
    let metadata_path =
        output_filename(&args.output_directory, &stem, batch_index, METADATA_EXTENSION);
    let payload_path =
        output_filename(&args.output_directory, &stem, batch_index, PAYLOAD_EXTENSION);

    // Sidecar first, then the payload it describes. The directory is never
    // created here: a missing directory is a fatal error.
    write_file(&metadata_path, sidecar.as_bytes())?;
    write_file(&payload_path, &encrypted.encrypted)?;

    tracing::debug!(batch = batch_index, metadata = %metadata_path, payload = %payload_path, "batch written");
    Ok(())
}

fn write_file(path: &str, contents: &[u8]) -> Result<(), GenError> {
    std::fs::write(path, contents).map_err(|source| GenError::Write {
        path: path.to_string(),
        source,
    })
}

fn output_filename(directory: &str, stem: &str, batch_index: usize, extension: &str) -> String {
    format!("{directory}/{stem}.{batch_index:03}.{extension}")
}
