use std::path::{Path, PathBuf};

use crate::cli::app_context::AppContext;
use crate::cli::args::CvCommand;
use crate::cli::handlers::{id_label, read_upload, settle, HandlerResult};
use crate::modules::cv::application::document_viewer::DocumentViewer;
use crate::modules::cv::domain::entities::{CvFile, CvTarget};
use crate::shared::ui::Notice;

pub async fn handle(ctx: &AppContext, action: CvCommand) -> Notice {
    let result = match action {
        CvCommand::Current => match ctx.cv.get_current.execute().await {
            Ok(Some(cv)) => {
                print_cv(&cv);
                Ok(Notice::info("Current CV"))
            }
            Ok(None) => Ok(Notice::info("No CV uploaded yet")),
            Err(e) => Err(Notice::from_error(&e)),
        },
        CvCommand::List => list(ctx).await,
        CvCommand::Show { id } => match ctx.cv.fetch_by_id.execute(id).await {
            Ok(cv) => {
                print_cv(&cv);
                Ok(Notice::info(format!("CV {id}")))
            }
            Err(e) => Err(Notice::from_error(&e)),
        },
        CvCommand::Upload { path } => upload(ctx, &path).await,
        CvCommand::Download {
            id,
            filename,
            output,
        } => {
            let target = match (id, filename) {
                (Some(id), _) => CvTarget::Id(id),
                (None, Some(filename)) => CvTarget::Filename(filename),
                (None, None) => CvTarget::Current,
            };
            download(ctx, target, output).await
        }
        CvCommand::Delete { id } => match ctx.cv.delete.execute(id).await {
            Ok(()) => Ok(Notice::success(match id {
                Some(id) => format!("CV {id} deleted"),
                None => "Current CV deleted".to_string(),
            })),
            Err(e) => Err(Notice::from_error(&e)),
        },
        CvCommand::Exists => match ctx.cv.exists.execute().await {
            Ok(true) => Ok(Notice::info("A CV is available")),
            Ok(false) => Ok(Notice::info("No CV uploaded yet")),
            Err(e) => Err(Notice::from_error(&e)),
        },
    };
    settle(result)
}

async fn list(ctx: &AppContext) -> HandlerResult {
    let files = ctx
        .cv
        .fetch_all
        .execute()
        .await
        .map_err(|e| Notice::from_error(&e))?;

    println!("{:<6} {:<32} {:<6} {:<10} Uploaded", "ID", "File", "Type", "Size");
    println!("{}", "─".repeat(80));
    for cv in &files {
        println!(
            "{:<6} {:<32} {:<6} {:<10} {}",
            id_label(cv.id),
            cv.filename,
            cv.type_label(),
            cv.size_label(),
            upload_label(cv)
        );
    }
    Ok(Notice::info(format!("{} CV file(s)", files.len())))
}

async fn upload(ctx: &AppContext, path: &Path) -> HandlerResult {
    let file = read_upload(path).await?;
    let cv = ctx
        .cv
        .upload
        .execute(file)
        .await
        .map_err(|e| Notice::from_error(&e))?;

    print_cv(&cv);
    Ok(Notice::success("CV uploaded, it is now the current one"))
}

/// Fetches the document into a viewer, writes it out and closes the viewer.
async fn download(ctx: &AppContext, target: CvTarget, output: PathBuf) -> HandlerResult {
    let cv = match &target {
        CvTarget::Current => ctx
            .cv
            .get_current
            .execute()
            .await
            .map_err(|e| Notice::from_error(&e))?
            .ok_or_else(|| Notice::info("No CV uploaded yet"))?,
        CvTarget::Id(id) => ctx
            .cv
            .fetch_by_id
            .execute(*id)
            .await
            .map_err(|e| Notice::from_error(&e))?,
        CvTarget::Filename(filename) => CvFile {
            filename: filename.clone(),
            ..CvFile::default()
        },
    };

    let bytes = ctx
        .cv
        .download
        .execute(target)
        .await
        .map_err(|e| Notice::from_error(&e))?;

    let mut viewer = DocumentViewer::new();
    let document = viewer.open(cv, bytes);
    let title = document.title();

    let written = tokio::fs::write(&output, &document.bytes).await;
    let size = viewer.held_bytes();
    viewer.close();

    written.map_err(|e| Notice::error(format!("Cannot write {}: {e}", output.display())))?;
    Ok(Notice::success(format!(
        "{title} saved to {} ({size} bytes)",
        output.display()
    )))
}

fn print_cv(cv: &CvFile) {
    println!("#{} {}", id_label(cv.id), cv.filename);
    println!("Type:     {}", cv.type_label());
    println!("Size:     {}", cv.size_label());
    println!("Uploaded: {}", upload_label(cv));
}

fn upload_label(cv: &CvFile) -> String {
    cv.upload_date
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
