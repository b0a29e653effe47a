//! Page content model.
//!
//! The chrome is data-driven: brand, navigation, sections, and marquee
//! phrases come from a JSON `<script id="page-data">` element, with a
//! built-in sample used when the host page provides none.

use serde::Deserialize;

/// A navigation link, rendered in both the desktop bar and mobile panel.
#[derive(Clone, Debug, Deserialize)]
pub struct NavItem {
	/// Visible link text.
	pub label: String,
	/// Link destination. Fragment hrefs keep their default behavior.
	pub href: String,
	/// In-page section id; when set, clicks fade-scroll to that section
	/// instead of following `href`.
	#[serde(default)]
	pub section: Option<String>,
	/// Open in a new browsing context; such links are never intercepted.
	#[serde(default)]
	pub new_tab: bool,
}

/// One content section of the page.
#[derive(Clone, Debug, Deserialize)]
pub struct Section {
	/// Element id; in-page navigation targets this.
	pub id: String,
	/// Section heading.
	pub title: String,
	/// Body copy.
	#[serde(default)]
	pub body: String,
}

/// Complete page content: brand, navigation, sections, marquee.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageData {
	/// Site name, shown in the header and hero.
	pub brand: String,
	/// Strapline under the hero heading.
	#[serde(default)]
	pub tagline: String,
	/// Navigation links.
	#[serde(default)]
	pub nav: Vec<NavItem>,
	/// Content sections below the hero.
	#[serde(default)]
	pub sections: Vec<Section>,
	/// Phrases for the scrolling marquee strip; empty disables it.
	#[serde(default)]
	pub marquee: Vec<String>,
}

impl PageData {
	/// Built-in demo content used when no `page-data` script is present.
	pub fn sample() -> Self {
		let section = |id: &str, title: &str, body: &str| Section {
			id: id.into(),
			title: title.into(),
			body: body.into(),
		};
		let jump = |label: &str, id: &str| NavItem {
			label: label.into(),
			href: format!("#{id}"),
			section: Some(id.into()),
			new_tab: false,
		};

		Self {
			brand: "Starlit".into(),
			tagline: "Interactive visuals and front-end engineering.".into(),
			nav: vec![
				jump("Work", "work"),
				jump("About", "about"),
				jump("Contact", "contact"),
			],
			sections: vec![
				section(
					"work",
					"Selected Work",
					"Generative installations, data-driven scenes, and the \
					 occasional experiment that escaped the sketchbook.",
				),
				section(
					"about",
					"About",
					"A small studio building animated interfaces that stay \
					 out of the content's way.",
				),
				section(
					"contact",
					"Contact",
					"Say hello — most projects start as a one-line email.",
				),
			],
			marquee: vec![
				"Creative Coding".into(),
				"Generative Art".into(),
				"Interface Motion".into(),
				"Real-time Graphics".into(),
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_page_data_json() {
		let json = r##"{
			"brand": "Acme",
			"nav": [
				{"label": "Work", "href": "#work", "section": "work"},
				{"label": "Blog", "href": "https://blog.example.com", "new_tab": true}
			],
			"sections": [{"id": "work", "title": "Work"}],
			"marquee": ["One", "Two"]
		}"##;

		let data: PageData = serde_json::from_str(json).unwrap();
		assert_eq!(data.brand, "Acme");
		assert_eq!(data.tagline, "");
		assert_eq!(data.nav.len(), 2);
		assert_eq!(data.nav[0].section.as_deref(), Some("work"));
		assert!(!data.nav[0].new_tab);
		assert!(data.nav[1].new_tab);
		assert_eq!(data.sections[0].body, "");
		assert_eq!(data.marquee, vec!["One", "Two"]);
	}

	#[test]
	fn sample_content_targets_its_own_sections() {
		let data = PageData::sample();
		assert!(!data.brand.is_empty());
		for item in &data.nav {
			let id = item.section.as_deref().expect("sample nav is in-page");
			assert!(
				data.sections.iter().any(|s| s.id == id),
				"nav link {} points at a missing section",
				item.label
			);
		}
	}
}
