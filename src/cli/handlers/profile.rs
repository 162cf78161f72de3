use std::path::{Path, PathBuf};

use crate::cli::app_context::AppContext;
use crate::cli::args::ProfileCommand;
use crate::cli::handlers::{id_label, read_upload, settle, HandlerResult};
use crate::modules::profile::application::domain::{Profile, ProfileSubmission};
use crate::shared::media::MediaUrls;
use crate::shared::ui::Notice;

pub async fn handle(ctx: &AppContext, action: ProfileCommand) -> Notice {
    let result = match action {
        ProfileCommand::Show => show(ctx).await,
        ProfileCommand::List => list(ctx).await,
        ProfileCommand::Create {
            full_name,
            title,
            bio,
            photo,
        } => create(ctx, full_name, title, bio, &photo).await,
        ProfileCommand::Update {
            full_name,
            title,
            bio,
            photo,
        } => update(ctx, full_name, title, bio, photo).await,
        ProfileCommand::Delete { id } => match ctx.profile.delete.execute(id).await {
            Ok(()) => Ok(Notice::success(format!("Profile {id} deleted"))),
            Err(e) => Err(Notice::from_error(&e)),
        },
    };
    settle(result)
}

async fn load_current(ctx: &AppContext) -> Result<Profile, Notice> {
    ctx.profile
        .load_current
        .execute()
        .await
        .map_err(|e| Notice::from_error(&e))?
        .ok_or_else(|| Notice::info("No profile yet, create one with `profile create`"))
}

async fn show(ctx: &AppContext) -> HandlerResult {
    let profile = load_current(ctx).await?;
    print_profile(&profile, &ctx.media);
    Ok(Notice::info(format!("Profile {}", id_label(profile.id))))
}

async fn list(ctx: &AppContext) -> HandlerResult {
    let profiles = ctx
        .profile
        .get_list
        .execute()
        .await
        .map_err(|e| Notice::from_error(&e))?;

    for profile in &profiles {
        println!(
            "{:<6} {:<30} {}",
            id_label(profile.id),
            profile.full_name,
            profile.title
        );
    }
    Ok(Notice::info(format!("{} profile(s)", profiles.len())))
}

async fn create(
    ctx: &AppContext,
    full_name: String,
    title: String,
    bio: String,
    photo: &Path,
) -> HandlerResult {
    let photo = read_upload(photo).await?;
    let submission = ProfileSubmission {
        full_name,
        title,
        bio,
        photo: Some(photo),
    };
    let profile = ctx
        .profile
        .create
        .execute(submission)
        .await
        .map_err(|e| Notice::from_error(&e))?;

    print_profile(&profile, &ctx.media);
    Ok(Notice::success("Profile created"))
}

/// Edits the current profile. Fields left out keep their stored value and
/// without a new photo the stored one is kept.
async fn update(
    ctx: &AppContext,
    full_name: Option<String>,
    title: Option<String>,
    bio: Option<String>,
    photo: Option<PathBuf>,
) -> HandlerResult {
    let current = load_current(ctx).await?;

    let mut submission = ProfileSubmission::from_profile(&current);
    if let Some(full_name) = full_name {
        submission.full_name = full_name;
    }
    if let Some(title) = title {
        submission.title = title;
    }
    if let Some(bio) = bio {
        submission.bio = bio;
    }
    if let Some(path) = photo {
        submission.photo = Some(read_upload(&path).await?);
    }

    let profile = ctx
        .profile
        .update
        .execute(&current, submission)
        .await
        .map_err(|e| Notice::from_error(&e))?;

    print_profile(&profile, &ctx.media);
    Ok(Notice::success("Profile updated"))
}

fn print_profile(profile: &Profile, urls: &MediaUrls) {
    println!("{} - {}", profile.full_name, profile.title);
    println!();
    println!("{}", profile.bio);
    println!();
    println!(
        "Photo: {}",
        urls.profile_photo_or_placeholder(profile.photo_url.as_deref())
    );
}
