//! Body of the project modal.
//!
//! Built here rather than in the renderer so the state layer can bound the
//! modal's body scroll with the same line count the renderer draws.

use super::text::wrap;
use crate::model::Project;
use crate::view::styles::Palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Wrapped body lines for `project` in a body `width` columns wide.
pub fn detail_lines(project: &Project, palette: &Palette, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let paragraph = |lines: &mut Vec<Line<'static>>, text: &str, style: Style| {
        for row in wrap(text, width) {
            lines.push(Line::from(Span::styled(row, style)));
        }
    };

    paragraph(&mut lines, &project.role, palette.accent);
    lines.push(Line::default());
    paragraph(&mut lines, &project.description, palette.base);

    if !project.tech_stack.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Technologies",
            palette.heading.add_modifier(Modifier::BOLD),
        )));
        paragraph(&mut lines, &project.tech_stack.join(" · "), palette.chip);
    }

    if let Some(url) = &project.live_url {
        lines.push(Line::default());
        paragraph(&mut lines, &format!("Live: {url} ↗"), palette.highlight);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PortfolioContent;
    use crate::model::Theme;
    use crate::view::styles::ColorConfig;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn lists_every_technology_not_just_the_card_four() {
        let content = PortfolioContent::builtin().expect("builtin content");
        let project = &content.projects[0];
        let palette = Palette::for_theme(Theme::Dark, ColorConfig::disabled());
        let text = plain(&detail_lines(project, &palette, 200)).join("\n");
        for tech in &project.tech_stack {
            assert!(text.contains(tech.as_str()), "missing {tech}");
        }
        assert!(text.starts_with(project.role.as_str()));
    }

    #[test]
    fn narrow_body_wraps_to_more_lines() {
        let content = PortfolioContent::builtin().expect("builtin content");
        let project = &content.projects[0];
        let palette = Palette::for_theme(Theme::Dark, ColorConfig::disabled());
        let wide = detail_lines(project, &palette, 120).len();
        let narrow = detail_lines(project, &palette, 30).len();
        assert!(narrow > wide);
    }
}
