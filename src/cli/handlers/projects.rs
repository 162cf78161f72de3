use std::path::PathBuf;

use crate::cli::app_context::AppContext;
use crate::cli::args::ProjectCommand;
use crate::cli::handlers::{id_label, read_upload, report, settle, HandlerResult};
use crate::modules::gallery::{PopupKey, ProjectCard, ProjectPopup};
use crate::modules::project::application::domain::Project;
use crate::modules::project::application::project_form::{FormMode, ProjectForm};
use crate::shared::media::{FileUpload, MediaUrls};
use crate::shared::ui::{truncate_text, Notice};

pub async fn handle(ctx: &AppContext, action: ProjectCommand) -> Notice {
    let result = match action {
        ProjectCommand::List => list(ctx).await,
        ProjectCommand::Show { id } => show(ctx, id).await,
        ProjectCommand::View { id, keys } => view(ctx, id, &keys).await,
        ProjectCommand::Create {
            title,
            description,
            technologies,
            images,
        } => {
            let mut form = ProjectForm::new();
            form.title = title;
            form.description = description;
            form.technologies = technologies;
            save(ctx, form, images).await
        }
        ProjectCommand::Update {
            id,
            title,
            description,
            technologies,
            images,
            remove_images,
        } => match edit_form(ctx, id, title, description, technologies, remove_images).await {
            Ok(form) => save(ctx, form, images).await,
            Err(notice) => Err(notice),
        },
        ProjectCommand::Delete { id } => match ctx.projects.delete.execute(id).await {
            Ok(()) => Ok(Notice::success(format!("Project {id} deleted"))),
            Err(e) => Err(Notice::from_error(&e)),
        },
    };
    settle(result)
}

async fn list(ctx: &AppContext) -> HandlerResult {
    let projects = ctx
        .projects
        .get_list
        .execute()
        .await
        .map_err(|e| Notice::from_error(&e))?;

    if projects.is_empty() {
        return Ok(Notice::info("No projects yet"));
    }

    println!("{:<6} {:<32} {:<7} Technologies", "ID", "Title", "Images");
    println!("{}", "─".repeat(80));
    for project in &projects {
        let card = ProjectCard::from_project(project, &ctx.media);
        println!(
            "{:<6} {:<32} {:<7} {}",
            id_label(card.id),
            truncate_text(&card.title, 29),
            card.image_count,
            card.technologies.join(", ")
        );
        println!("       {}", card.excerpt);
    }

    Ok(Notice::info(format!("{} project(s)", projects.len())))
}

async fn show(ctx: &AppContext, id: i64) -> HandlerResult {
    let project = ctx
        .projects
        .get_single
        .execute(id)
        .await
        .map_err(|e| Notice::from_error(&e))?;

    print_project(&project, &ctx.media);
    Ok(Notice::info(format!("Project {id}")))
}

async fn view(ctx: &AppContext, id: i64, keys: &[String]) -> HandlerResult {
    let project = ctx
        .projects
        .get_single
        .execute(id)
        .await
        .map_err(|e| Notice::from_error(&e))?;

    let mut popup = ProjectPopup::new();
    popup.open(project);
    print_frame(&popup, &ctx.media);

    for key in keys {
        if !popup.handle_key(PopupKey::from_name(key.trim())) {
            report(&Notice::warning(format!("Ignored key {key}")));
            continue;
        }
        if !popup.is_open() {
            return Ok(Notice::info("Popup closed"));
        }
        print_frame(&popup, &ctx.media);
    }

    Ok(Notice::info(format!("Viewed project {id}")))
}

/// Loads the stored project into a form and applies the edits.
async fn edit_form(
    ctx: &AppContext,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    technologies: Option<String>,
    mut remove_images: Vec<usize>,
) -> Result<ProjectForm, Notice> {
    let project = ctx
        .projects
        .get_single
        .execute(id)
        .await
        .map_err(|e| Notice::from_error(&e))?;

    let mut form = ProjectForm::for_project(&project);
    if let Some(title) = title {
        form.title = title;
    }
    if let Some(description) = description {
        form.description = description;
    }
    if let Some(technologies) = technologies {
        form.technologies = technologies;
    }

    // highest position first so earlier positions stay valid
    remove_images.sort_unstable();
    remove_images.dedup();
    for index in remove_images.into_iter().rev() {
        if form.remove_existing(index).is_none() {
            report(&Notice::warning(format!("No stored image at position {index}")));
        }
    }
    Ok(form)
}

/// Attaches the files to the form and submits it through the create or
/// update use case, depending on the form mode.
async fn save(ctx: &AppContext, mut form: ProjectForm, paths: Vec<PathBuf>) -> HandlerResult {
    let mut files: Vec<FileUpload> = Vec::with_capacity(paths.len());
    for path in &paths {
        files.push(read_upload(path).await?);
    }
    for notice in form.attach_all(files) {
        report(&notice);
    }

    let submission = form.begin_submit().map_err(|e| Notice::from_error(&e))?;

    let saved = match form.mode() {
        FormMode::Create => ctx.projects.create.execute(submission).await,
        FormMode::Edit(id) => ctx.projects.update.execute(id, submission).await,
    };

    match saved {
        Ok(project) => {
            form.finish_submit(Some(&project));
            print_project(&project, &ctx.media);
            Ok(Notice::success(format!("Project \"{}\" saved", project.title)))
        }
        Err(e) => {
            form.finish_submit(None);
            Err(Notice::from_error(&e))
        }
    }
}

fn print_project(project: &Project, urls: &MediaUrls) {
    println!("#{} {}", id_label(project.id), project.title);
    println!();
    println!("{}", project.description);
    println!();
    println!("Technologies: {}", project.technologies.to_wire());
    println!("Images ({}):", project.image_count());
    for (index, image) in project.images.iter().enumerate() {
        println!(
            "  [{index}] {}",
            urls.project_image_or_placeholder(&image.image_url)
        );
    }
}

fn print_frame(popup: &ProjectPopup, urls: &MediaUrls) {
    let counter = popup.counter_label().unwrap_or_default();
    if let Some(url) = popup.current_image_url(urls) {
        println!("{counter:>7}  {url}");
    }
}
