use crate::cli::app_context::AppContext;
use crate::cli::handlers::{id_label, report, HandlerResult};
use crate::modules::dashboard::DashboardSnapshot;
use crate::shared::ui::{truncate_text, Notice};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

pub async fn show(ctx: &AppContext) -> HandlerResult {
    let snapshot = ctx.dashboard.load().await;

    for section in &snapshot.degraded {
        report(&Notice::warning(format!("Could not load {section}")));
    }

    print_snapshot(&snapshot);

    if snapshot.degraded.is_empty() {
        Ok(Notice::info("Dashboard loaded"))
    } else {
        Ok(Notice::warning("Dashboard loaded with missing sections"))
    }
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    let stats = snapshot.stats();

    println!("Projects:  {}", stats.total_projects);
    println!("Images:    {}", stats.total_images);
    println!("Messages:  {}", stats.message_count);
    println!("Profile:   {}", yes_no(stats.has_profile));
    println!("CV:        {}", yes_no(stats.has_cv));
    println!();

    println!("Recent projects:");
    for project in snapshot.recent_projects() {
        println!("  #{:<5} {}", id_label(project.id), project.title);
    }

    let technologies = snapshot.recent_technologies();
    if !technologies.is_empty() {
        println!("  Technologies: {}", technologies.join(", "));
    }
    println!();

    println!("Recent messages:");
    for message in snapshot.recent_messages() {
        println!(
            "  #{:<5} {:<20} {}",
            id_label(message.id),
            truncate_text(&message.name, 17),
            message.received_label()
        );
    }

    if let Some(cv) = &snapshot.current_cv {
        println!();
        println!("Current CV: {} ({}, {})", cv.filename, cv.type_label(), cv.size_label());
    }
}
