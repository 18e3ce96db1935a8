//! `meridian-uploader` -- out-of-band gallery upload utility.
//!
//! Uploads an ordered set of large/thumbnail image pairs for an existing
//! build or travel location: objects go to the S3 bucket under
//! `<name>/large/` and `<name>/thumbnail/`, and the image, description,
//! and join rows are inserted with ascending `order_index`. The running
//! site never writes these tables; this tool is the only writer.
//!
//! # Usage
//!
//! ```text
//! meridian-uploader <travel|build> <name> <large_dir> <thumbnail_dir> <captions_file>
//! ```
//!
//! The captions file holds one line per image (blank line for "none").
//!
//! # Environment variables
//!
//! | Variable        | Required | Description                      |
//! |-----------------|----------|----------------------------------|
//! | `DATABASE_URL`  | yes      | PostgreSQL connection string     |
//! | `AWS_S3_BUCKET` | yes      | Target bucket name               |

mod error;
mod files;
mod upload;

use std::path::{Path, PathBuf};
use std::process::exit;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use upload::{ParentKind, UploadJob};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meridian_uploader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [kind, name, large_dir, thumbnail_dir, captions_file] = args.as_slice() else {
        eprintln!(
            "Usage: meridian-uploader <travel|build> <name> <large_dir> <thumbnail_dir> <captions_file>"
        );
        exit(1);
    };

    let kind = match kind.as_str() {
        "travel" => ParentKind::Travel,
        "build" => ParentKind::Build,
        other => {
            eprintln!("Unknown target {other:?}: expected \"travel\" or \"build\"");
            exit(1);
        }
    };

    let captions = files::read_captions(Path::new(captions_file)).unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to read captions file");
        exit(1);
    });

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::error!("DATABASE_URL environment variable is required");
        exit(1);
    });

    let pool = meridian_db::create_pool(&database_url)
        .await
        .unwrap_or_else(|err| {
            tracing::error!(error = %err, "Failed to connect to database");
            exit(1);
        });

    let storage = meridian_cloud::S3Storage::from_env()
        .await
        .unwrap_or_else(|err| {
            tracing::error!(error = %err, "Failed to create S3 storage client");
            exit(1);
        });

    let job = UploadJob {
        kind,
        name: name.clone(),
        large_dir: PathBuf::from(large_dir),
        thumbnail_dir: PathBuf::from(thumbnail_dir),
        captions,
    };

    tracing::info!(
        name = %job.name,
        large_dir = %job.large_dir.display(),
        thumbnail_dir = %job.thumbnail_dir.display(),
        "Starting upload"
    );

    match upload::run(&pool, &storage, &job).await {
        Ok(()) => tracing::info!("All uploads complete"),
        Err(err) => {
            tracing::error!(error = %err, "Upload failed");
            exit(1);
        }
    }
}
