//! Plain-text info card, as the web client lays it out

use crate::proxy::models::InfoResponse;
use crate::utils::format_length_seconds;

/// Title, `By <author> • m:ss`, thumbnail, then one line per format with a
/// `V`/`A` badge, label, upper-cased container and itag.
pub fn render_card(response: &InfoResponse) -> String {
    let details = &response.video_details;
    let mut lines = vec![
        details.title.clone(),
        format!(
            "By {} • {}",
            details.author,
            format_length_seconds(&details.length_seconds)
        ),
        details.thumbnail.clone(),
        String::new(),
        "Available Qualities".to_string(),
    ];

    if response.formats.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(response.formats.iter().map(|format| {
        format!(
            "  [{}] {:<12} {:<5} itag {}",
            if format.has_video { 'V' } else { 'A' },
            format.display_label(),
            format.container.to_uppercase(),
            format.itag
        )
    }));

    let mut card = lines.join("\n");
    card.push('\n');
    card
}
