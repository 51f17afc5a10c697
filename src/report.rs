//! Render the OAuth group configuration report.
//!
//! The whole report is built as a string first; nothing is printed for a
//! run whose configuration fails to resolve.

use crate::provider::{ConfigError, ConfigProvider, keys};

const BANNER: &str = "============================================================";

const SETUP_CHECKLIST: &[&str] = &[
    "  [ ] Enable Admin SDK API in Google Cloud Console",
    "  [ ] Add Admin SDK scope to OAuth consent screen",
    "  [ ] Set up domain-wide delegation (if using service account)",
    "  [ ] Create Google Groups in Google Admin Console:",
    "      - openwebui-admins (for admin users)",
    "      - openwebui-users (for regular users)",
    "      - Any custom groups for your organization",
];

const NEXT_STEPS: &[&str] = &[
    "  1. Go to Google Cloud Console > APIs & Credentials",
    "  2. Enable the Admin SDK API",
    "  3. Update OAuth consent screen with required scope:",
    "     https://www.googleapis.com/auth/admin.directory.group.member.readonly",
    "  4. Create Google Groups in Google Admin Console",
    "  5. Restart Open WebUI server",
    "  6. Test OAuth login - groups should be fetched automatically",
];

const GROUP_STRUCTURE: &[(&str, &str)] = &[
    ("openwebui-admins", "Admin role in Open WebUI"),
    ("openwebui-users", "User role in Open WebUI"),
    ("openwebui-readonly", "Read-only access (if needed)"),
    ("openwebui-blocked", "Blocked users (add to OAUTH_BLOCKED_GROUPS)"),
];

const CLOSING_NOTES: &[&str] = &[
    "Review the checklist above and configure Google Cloud Console",
    "Documentation: https://developers.google.com/admin-sdk/directory/",
];

/// Build the full report text from the provider's current values.
///
/// Deterministic per provider state; two calls against the same state
/// return byte-identical strings.
pub fn render(provider: &dyn ConfigProvider) -> Result<String, ConfigError> {
    // Resolve everything up front so a missing key aborts before any
    // report text exists.
    let group_management = provider.flag(keys::ENABLE_OAUTH_GROUP_MANAGEMENT)?;
    let groups_claim = provider.string(keys::OAUTH_GROUPS_CLAIM)?;
    let admin_roles = provider.string_list(keys::OAUTH_ADMIN_ROLES)?;
    let allowed_roles = provider.string_list(keys::OAUTH_ALLOWED_ROLES)?;
    let client_id = provider.string(keys::GOOGLE_CLIENT_ID)?;

    let mut lines: Vec<String> = vec![
        BANNER.into(),
        "Open WebUI Google Groups Setup Helper".into(),
        BANNER.into(),
        String::new(),
        "Checking OAuth group configuration...".into(),
    ];

    lines.push(format!(
        "{}: {}",
        keys::ENABLE_OAUTH_GROUP_MANAGEMENT,
        group_management
    ));
    lines.push(format!("{}: {}", keys::OAUTH_GROUPS_CLAIM, groups_claim));
    lines.push(format!(
        "{}: {}",
        keys::OAUTH_ADMIN_ROLES,
        fmt_list(&admin_roles)
    ));
    lines.push(format!(
        "{}: {}",
        keys::OAUTH_ALLOWED_ROLES,
        fmt_list(&allowed_roles)
    ));
    lines.push(format!(
        "{} configured: {}",
        keys::GOOGLE_CLIENT_ID,
        if client_id.is_empty() { "No" } else { "Yes" }
    ));

    lines.push(String::new());
    lines.push("Required Google Groups setup checklist:".into());
    lines.extend(SETUP_CHECKLIST.iter().map(|s| s.to_string()));

    lines.push(String::new());
    lines.push("Next steps:".into());
    lines.extend(NEXT_STEPS.iter().map(|s| s.to_string()));

    lines.push(String::new());
    lines.push("Suggested Google Groups structure:".into());
    push_table(&mut lines, GROUP_STRUCTURE);

    lines.push(String::new());
    lines.push(BANNER.into());
    lines.extend(CLOSING_NOTES.iter().map(|s| s.to_string()));
    lines.push(BANNER.into());

    Ok(lines.join("\n") + "\n")
}

/// Render a role list the way the host application logs it: ['a', 'b'].
fn fmt_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{s}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn push_table(lines: &mut Vec<String>, rows: &[(&str, &str)]) {
    let name_w = rows.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
    for (name, desc) in rows {
        lines.push(format!("  {:<width$}  {}", name, desc, width = name_w));
    }
}
