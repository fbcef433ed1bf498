use clap::{CommandFactory, Parser};
use depthmap::cli::Args;
use depthmap::depth::{self, DepthBuffer, ProcessError};
use depthmap::image::{self, DepthImage};
use std::process::ExitCode;
use tracing::{debug, Level};

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.debug { Level::DEBUG } else { Level::INFO })
        .init();

    run(&args)
}

/// Process every input file; failure if any of them failed
fn run(args: &Args) -> ExitCode {
    if args.files.is_empty() {
        let _ = Args::command().print_help();
        println!();
        return ExitCode::SUCCESS;
    }

    let multiple_files = args.files.len() > 1;
    let mut any_failed = false;

    for (idx, file_path) in args.files.iter().enumerate() {
        if multiple_files {
            println!("{}", file_path.display());
        }

        match process_file(file_path, args) {
            Ok(depth_image) => println!("{}", depth_image.result),
            Err(e) => {
                println!("Error: {e}");
                any_failed = true;
            }
        }

        if multiple_files && idx < args.files.len() - 1 {
            println!();
        }
    }

    if any_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Process a single raw depth file
fn process_file(file_path: &std::path::Path, args: &Args) -> Result<DepthImage, ProcessError> {
    let dimensions = args.dimensions();

    // Stage 1: Read raw bytes
    let bytes = depth::open_depth_file(file_path)
        .map_err(|e| ProcessError::ReadFailed(format!("{e:#}")))?;

    // Stage 2: Decode samples
    let mut buffer = DepthBuffer::from_le_bytes(dimensions, &bytes)
        .map_err(|e| ProcessError::InvalidBuffer(e.to_string()))?;
    debug!(path = %file_path.display(), %dimensions, "decoded depth map");

    // Stage 3: Normalize
    let result = if args.strict {
        depth::try_normalize(&mut buffer).map_err(|e| ProcessError::NormalizationFailed {
            dimensions,
            error: e.to_string(),
        })?
    } else {
        depth::normalize(&mut buffer)
    };

    // Stage 4: Orient
    let depth_image =
        image::orient_normalized(buffer, result, args.orientation.into())
            .map_err(|e| ProcessError::ConversionFailed {
                dimensions,
                error: format!("{e:#}"),
            })?;

    // Stage 5: Verbose output
    if args.verbose {
        depthmap::print_summary(dimensions, &depth_image);
    }

    // Stage 6: Write normalized samples
    if let Some(output_dir) = &args.output_dir {
        let output_path = depth::normalized_output_path(output_dir, file_path);
        depth::write_depth_file(&output_path, depth_image.samples()).map_err(|e| {
            ProcessError::WriteFailed {
                dimensions,
                error: format!("{e:#}"),
            }
        })?;
        debug!(path = %output_path.display(), "wrote normalized depth map");
    }

    Ok(depth_image)
}
