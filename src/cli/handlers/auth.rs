use crate::cli::app_context::AppContext;
use crate::cli::handlers::{report, HandlerResult};
use crate::modules::auth::application::domain::entities::{AuthSession, LoginRequest, UserAccount};
use crate::shared::ui::Notice;

/// Signs in and stores the session for the rest of this process.
pub async fn sign_in(ctx: &AppContext, email: &str, password: &str) -> Result<AuthSession, Notice> {
    let request = LoginRequest::new(email, password).map_err(|e| Notice::from_error(&e))?;
    ctx.auth
        .login
        .execute(request)
        .await
        .map_err(|e| Notice::from_error(&e))
}

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> HandlerResult {
    let session = sign_in(ctx, email, password).await?;

    // tokens only live in memory, print them so they can be exported
    println!("PORTFOLIO_ACCESS_TOKEN={}", session.access_token);
    if let Some(refresh_token) = &session.refresh_token {
        println!("PORTFOLIO_REFRESH_TOKEN={refresh_token}");
    }

    let who = session
        .user
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_else(|| email.trim().to_lowercase());
    Ok(Notice::success(format!("Signed in as {who}")))
}

pub async fn refresh(ctx: &AppContext) -> HandlerResult {
    let session = ctx
        .auth
        .refresh
        .execute()
        .await
        .map_err(|e| Notice::from_error(&e))?;

    println!("PORTFOLIO_ACCESS_TOKEN={}", session.access_token);
    if let Some(refresh_token) = &session.refresh_token {
        println!("PORTFOLIO_REFRESH_TOKEN={refresh_token}");
    }
    Ok(Notice::success("Session refreshed"))
}

pub async fn whoami(ctx: &AppContext) -> HandlerResult {
    if !ctx.auth.session.is_authenticated() {
        report(&Notice::warning("The held access token is missing or expired"));
    }

    let user = ctx
        .auth
        .me
        .execute()
        .await
        .map_err(|e| Notice::from_error(&e))?;

    print_account(&user);
    Ok(Notice::info(format!("Signed in as {}", user.username)))
}

/// Shell line that clears the exported tokens.
pub const UNSET_TOKENS: &str = "unset PORTFOLIO_ACCESS_TOKEN PORTFOLIO_REFRESH_TOKEN";

pub fn logout(ctx: &AppContext) -> HandlerResult {
    ctx.auth.logout.execute();

    // exported tokens are read again on the next run
    println!("{UNSET_TOKENS}");
    Ok(Notice::info(logout_message()))
}

fn logout_message() -> String {
    format!("Signed out. Run `{UNSET_TOKENS}` so later commands stay signed out")
}

fn print_account(user: &UserAccount) {
    println!("ID:       {}", user.id);
    println!("Username: {}", user.username);
    println!("Email:    {}", user.email);
    println!("Role:     {}", user.role);
}
