//! Gallery filter and inspection tests over the real portfolio content.

use folio_core::{Gallery, GalleryItem, Portfolio, Project, Skill};

fn project_ids(items: &[&Project]) -> Vec<u32> {
    items.iter().map(|p| p.id).collect()
}

#[test]
fn test_every_project_category_is_an_ordered_subsequence() {
    let projects = Portfolio::default().projects;
    let mut gallery = Gallery::new(projects.clone());

    for category in gallery.categories().to_vec() {
        gallery.set_category(&category);
        let visible = project_ids(&gallery.visible_items());

        let expected: Vec<u32> = if category == "All" {
            projects.iter().map(|p| p.id).collect()
        } else {
            projects
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect()
        };

        assert_eq!(visible, expected, "category {category}");
        assert!(!visible.is_empty(), "derived category {category} has items");
    }
}

#[test]
fn test_web_development_projects() {
    let mut gallery = Gallery::new(Portfolio::default().projects);
    gallery.set_category("Web Development");
    let titles: Vec<&str> = gallery
        .visible_items()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Balay Balayan", "Coastline 5023"]);
}

#[test]
fn test_select_then_dismiss_survives_filter_churn() {
    let mut gallery = Gallery::new(Portfolio::default().projects);
    gallery.select(&2);

    for category in ["Mobile App", "All", "Game Development", "nonexistent"] {
        gallery.set_category(category);
    }
    assert_eq!(
        gallery.inspected_item().map(|p| p.title.as_str()),
        Some("Helmet Detection System")
    );

    gallery.dismiss();
    assert!(gallery.inspected_item().is_none());
}

#[test]
fn test_skill_gallery_counts_match_legend() {
    let skills = Portfolio::default().skills;
    let gallery: Gallery<Skill> = Gallery::new(skills.clone());

    let total: usize = gallery
        .categories()
        .iter()
        .skip(1)
        .map(|c| gallery.count_in(c))
        .sum();
    assert_eq!(total, skills.len());
    assert_eq!(gallery.count_in("Language"), 5);
    assert_eq!(gallery.count_in("Backend"), 3);
}

#[test]
fn test_skills_selected_by_name() {
    let mut gallery = Gallery::new(Portfolio::default().skills);
    let selected = gallery.select(&"OpenCV".to_string()).map(|s| s.id());
    assert_eq!(selected, Some("OpenCV".to_string()));
    assert_eq!(gallery.inspected_item().map(|s| s.level), Some(70));
}

#[test]
fn test_empty_collection_has_only_all() {
    let mut gallery: Gallery<Project> = Gallery::new(Vec::new());
    gallery.set_category("All");
    assert!(gallery.visible_items().is_empty());
    assert_eq!(gallery.categories(), &["All"]);
}
