//! Portfolio content: projects, skills, biography and the intro dialogue.
//!
//! Content ships with built-in defaults and can be replaced by a versioned
//! JSON file, which keeps the site data out of the rendering code.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tracing::info;

use crate::gallery::GalleryItem;
use crate::typewriter::{Line, Script, SequencerError};

/// Errors from loading or saving content files.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("Invalid dialogue: {0}")]
    Dialogue(#[from] SequencerError),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Skill {skill} has level {level}, expected 0-100")]
    InvalidLevel { skill: String, level: u8 },
}

/// Current content file version.
const CONTENT_VERSION: u32 = 1;

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Technologies shown on a card: the first three plus a "+N" overflow tag.
    pub fn card_technologies(&self) -> (Vec<&str>, Option<usize>) {
        let shown = self.technologies.iter().take(3).map(String::as_str).collect();
        let hidden = self.technologies.len().saturating_sub(3);
        (shown, (hidden > 0).then_some(hidden))
    }
}

impl GalleryItem for Project {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// A skill with a self-assessed level out of 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub level: u8,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default)]
    pub color: String,
}

impl Skill {
    pub fn tier(&self) -> SkillTier {
        SkillTier::from_level(self.level)
    }
}

impl GalleryItem for Skill {
    type Id = String;

    fn id(&self) -> String {
        self.name.clone()
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// Highest level a skill can have.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// Level at which the summary panel counts a skill as advanced.
pub const SUMMARY_ADVANCED_LEVEL: u8 = 80;

/// Label shown for a skill level in its detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillTier {
    Advanced,
    Intermediate,
    Learning,
}

impl SkillTier {
    pub fn from_level(level: u8) -> Self {
        match level {
            85..=u8::MAX => Self::Advanced,
            70..=84 => Self::Intermediate,
            _ => Self::Learning,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Learning => "Learning",
        }
    }
}

/// Headline numbers for the skills summary panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillSummary {
    pub count: usize,
    /// Mean level, rounded half up. Zero for an empty list.
    pub average: u32,
    /// Skills at or above [`SUMMARY_ADVANCED_LEVEL`].
    pub advanced: usize,
}

pub fn skill_summary(skills: &[Skill]) -> SkillSummary {
    let count = skills.len();
    if count == 0 {
        return SkillSummary::default();
    }
    let total: u32 = skills.iter().map(|skill| u32::from(skill.level)).sum();
    let count_u32 = count as u32;
    SkillSummary {
        count,
        average: (2 * total + count_u32) / (2 * count_u32),
        advanced: skills
            .iter()
            .filter(|skill| skill.level >= SUMMARY_ADVANCED_LEVEL)
            .count(),
    }
}

/// Biography shown on the about page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
}

/// Everything the site displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: String,
    pub headline: String,
    pub about: About,
    pub dialogue: Vec<Line>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

impl Portfolio {
    /// The intro dialogue as a playable script.
    pub fn script(&self) -> Result<Script, SequencerError> {
        Script::new(self.dialogue.clone())
    }

    /// Check the invariants the galleries and the sequencer rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        self.script()?;

        let mut project_ids: Vec<u32> = Vec::with_capacity(self.projects.len());
        for project in &self.projects {
            if project_ids.contains(&project.id) {
                return Err(ContentError::DuplicateId {
                    kind: "project",
                    id: project.id.to_string(),
                });
            }
            project_ids.push(project.id);
        }

        let mut skill_names: Vec<&str> = Vec::with_capacity(self.skills.len());
        for skill in &self.skills {
            if skill_names.contains(&skill.name.as_str()) {
                return Err(ContentError::DuplicateId {
                    kind: "skill",
                    id: skill.name.clone(),
                });
            }
            skill_names.push(&skill.name);

            if skill.level > MAX_SKILL_LEVEL {
                return Err(ContentError::InvalidLevel {
                    skill: skill.name.clone(),
                    level: skill.level,
                });
            }
        }

        Ok(())
    }

    /// Load a content file, checking its version and invariants.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).await?;
        let file: ContentFile = serde_json::from_str(&json)?;

        if file.version != CONTENT_VERSION {
            return Err(ContentError::VersionMismatch {
                expected: CONTENT_VERSION,
                found: file.version,
            });
        }

        file.portfolio.validate()?;
        info!(
            path = %path.display(),
            projects = file.portfolio.projects.len(),
            skills = file.portfolio.skills.len(),
            "loaded portfolio content"
        );
        Ok(file.portfolio)
    }

    /// Write this portfolio as a content file.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), ContentError> {
        let json = self.to_json()?;
        fs::write(path, json).await?;
        Ok(())
    }

    /// Serialize as a versioned content file.
    pub fn to_json(&self) -> Result<String, ContentError> {
        let file = ContentFileRef {
            version: CONTENT_VERSION,
            portfolio: self,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

#[derive(Deserialize)]
struct ContentFile {
    version: u32,
    portfolio: Portfolio,
}

#[derive(Serialize)]
struct ContentFileRef<'a> {
    version: u32,
    portfolio: &'a Portfolio,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            owner: "Josaiah Borres".to_string(),
            headline: "B.S. Computer Science student at UP Visayas.".to_string(),
            about: default_about(),
            dialogue: default_dialogue(),
            projects: default_projects(),
            skills: default_skills(),
        }
    }
}

fn default_about() -> About {
    About {
        paragraphs: vec![
            "I'm a passionate full-stack developer with a love for creating elegant solutions \
             to complex problems. With expertise in modern web technologies, I specialize in \
             building responsive, user-friendly applications that make a difference."
                .to_string(),
            "When I'm not coding, you can find me exploring new technologies, contributing to \
             open-source projects, or sharing knowledge with the developer community."
                .to_string(),
        ],
        languages: ["JavaScript", "TypeScript", "Python", "Java", "HTML/CSS", "SQL"]
            .into_iter()
            .map(String::from)
            .collect(),
        courses: [
            "Web Development Bootcamp",
            "Advanced React & Redux",
            "Data Structures & Algorithms",
            "Cloud Computing with AWS",
            "Mobile App Development",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    }
}

fn default_dialogue() -> Vec<Line> {
    [
        "Hello there! I'm Josaiah.",
        "I'm a Full-stack Developer who loves building interactive experiences.",
        "Feel free to look around my projects below!",
        "If you want to chat, just hit that Contact button in the corner.",
    ]
    .into_iter()
    .map(|text| Line::new("JOSAIAH", text).with_image("/character1.png"))
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: u32,
    title: &str,
    description: &str,
    category: &str,
    technologies: &[&str],
    live_url: Option<&str>,
    github_url: Option<&str>,
    featured: bool,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        image: String::new(),
        live_url: live_url.map(String::from),
        github_url: github_url.map(String::from),
        featured,
    }
}

fn default_projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Tagpuan",
            "A digital contract farming and agricultural marketplace platform.",
            "Mobile App",
            &["React", "Firebase", "Node.js", "Maps API", "Data Analytics"],
            Some("https://tagpuan.xyz"),
            None,
            true,
        ),
        project(
            2,
            "Helmet Detection System",
            "An AI-powered computer vision system that detects whether riders are wearing helmets in real time.",
            "Computer Vision / AI",
            &["Python", "OpenCV", "TensorFlow", "YOLO"],
            None,
            None,
            true,
        ),
        project(
            3,
            "Push Guys",
            "A 3D block-puzzle game inspired by Tetris mechanics.",
            "Game Development",
            &["Unity", "C#", "3D Physics"],
            None,
            Some("https://github.com/Lordbeejay/Push_Guys.git"),
            false,
        ),
        project(
            4,
            "FitTrack Pro",
            "A fitness tracking web application designed to help users monitor workouts.",
            "Mobile App",
            &["React", "TypeScript", "CSS", "Chart.js"],
            None,
            Some("https://github.com/Lordbeejay/FitTrackPro_FinalProject.git"),
            false,
        ),
        project(
            5,
            "Balay Balayan",
            "A dormitory management system designed to streamline room assignments.",
            "Web Development",
            &["React", "TypeScript", "Firebase", "CSS"],
            Some("https://balaybalayan.vercel.app/"),
            Some("https://github.com/herbert-cane/balaybalayan.git"),
            false,
        ),
        project(
            6,
            "WOAH Game",
            "A single-player interactive game powered by computer vision that tracks player movements in real-time.",
            "Computer Vision / Game Development",
            &["Python", "OpenCV", "TensorFlow", "PyGame"],
            None,
            None,
            false,
        ),
        project(
            7,
            "Coastline 5023",
            "A modern landing page for Coastline 5023, focusing on Incubatees.",
            "Web Development",
            &["HTML", "CSS", "JavaScript", "Responsive Design"],
            Some("https://coastline5023.vercel.app/"),
            None,
            true,
        ),
    ]
}

fn skill(
    name: &str,
    category: &str,
    level: u8,
    description: &str,
    years: &str,
    color: &str,
) -> Skill {
    Skill {
        name: name.to_string(),
        category: category.to_string(),
        level,
        description: description.to_string(),
        experience: Some(years.to_string()),
        color: color.to_string(),
    }
}

fn default_skills() -> Vec<Skill> {
    vec![
        skill(
            "React",
            "Frontend",
            90,
            "Component-based UI library for building interactive web applications with hooks and state management.",
            "2 years",
            "#61DAFB",
        ),
        skill(
            "TypeScript",
            "Language",
            82,
            "Strongly-typed JavaScript superset that improves code quality and developer experience.",
            "2 years",
            "#3178C6",
        ),
        skill(
            "Python",
            "Language",
            85,
            "Versatile high-level language used for AI/ML, scripting, backend services, and data analysis.",
            "2 years",
            "#F7D44C",
        ),
        skill(
            "JavaScript",
            "Language",
            88,
            "The language of the web, used across frontend, backend (Node.js), and mobile (React Native).",
            "2 years",
            "#F7DF1E",
        ),
        skill(
            "Node.js",
            "Backend",
            78,
            "JavaScript runtime for building scalable server-side applications and REST APIs.",
            "2 years",
            "#68A063",
        ),
        skill(
            "SQL",
            "Database",
            80,
            "Structured Query Language for managing relational databases and complex queries.",
            "2 years",
            "#E8A87C",
        ),
        skill(
            "React Native",
            "Mobile",
            75,
            "Cross-platform mobile framework using React for building native iOS and Android apps.",
            "2 years",
            "#61DAFB",
        ),
        skill(
            "TensorFlow",
            "AI / ML",
            72,
            "Open-source ML framework used for building neural networks, image classifiers, and YOLO models.",
            "1 year",
            "#FF6F00",
        ),
        skill(
            "OpenCV",
            "AI / ML",
            70,
            "Computer vision library used for image processing, object detection, and real-time video analysis.",
            "1 year",
            "#5C3EE8",
        ),
        skill(
            "Unity",
            "Game Dev",
            74,
            "Cross-platform game engine used to build 3D and 2D games with C# scripting and physics.",
            "1 year",
            "#AAAAAA",
        ),
        skill(
            "C#",
            "Language",
            72,
            "Object-oriented language primarily used with Unity and .NET for building robust applications.",
            "1 year",
            "#9B4993",
        ),
        skill(
            "Figma",
            "Design",
            80,
            "Collaborative interface design tool for creating UI/UX wireframes, prototypes, and design systems.",
            "2 years",
            "#F24E1E",
        ),
        skill(
            "Firebase",
            "Backend",
            78,
            "Google's BaaS platform providing auth, real-time database, Firestore, and cloud functions.",
            "2 years",
            "#FFCA28",
        ),
        skill(
            "PHP",
            "Backend",
            65,
            "Server-side scripting language widely used for web development and CMS platforms.",
            "1 year",
            "#777BB4",
        ),
        skill(
            "C++",
            "Language",
            68,
            "Systems-level language with fine-grained memory control, used in games, OS, and embedded systems.",
            "1 year",
            "#00599C",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Gallery;

    #[test]
    fn test_default_content_is_valid() {
        let portfolio = Portfolio::default();
        portfolio.validate().unwrap();
        assert_eq!(portfolio.dialogue.len(), 4);
        assert_eq!(portfolio.projects.len(), 7);
        assert_eq!(portfolio.skills.len(), 15);
    }

    #[test]
    fn test_project_categories() {
        let gallery = Gallery::new(Portfolio::default().projects);
        assert_eq!(
            gallery.categories(),
            &[
                "All",
                "Mobile App",
                "Computer Vision / AI",
                "Game Development",
                "Web Development",
                "Computer Vision / Game Development",
            ]
        );
    }

    #[test]
    fn test_card_technologies_overflow() {
        let tagpuan = &Portfolio::default().projects[0];
        let (shown, hidden) = tagpuan.card_technologies();
        assert_eq!(shown, vec!["React", "Firebase", "Node.js"]);
        assert_eq!(hidden, Some(2));

        let push_guys = &Portfolio::default().projects[2];
        assert_eq!(push_guys.card_technologies().1, None);
    }

    #[test]
    fn test_skill_tiers() {
        assert_eq!(SkillTier::from_level(100), SkillTier::Advanced);
        assert_eq!(SkillTier::from_level(85), SkillTier::Advanced);
        assert_eq!(SkillTier::from_level(84), SkillTier::Intermediate);
        assert_eq!(SkillTier::from_level(70), SkillTier::Intermediate);
        assert_eq!(SkillTier::from_level(69), SkillTier::Learning);

        let skills = Portfolio::default().skills;
        let typescript = skills.iter().find(|s| s.name == "TypeScript").unwrap();
        assert_eq!(typescript.tier().name(), "Intermediate");
        let cpp = skills.iter().find(|s| s.name == "C++").unwrap();
        assert_eq!(cpp.tier().name(), "Learning");
    }

    #[test]
    fn test_skill_summary() {
        let summary = skill_summary(&Portfolio::default().skills);
        assert_eq!(summary.count, 15);
        assert_eq!(summary.average, 77);
        assert_eq!(summary.advanced, 6);

        assert_eq!(skill_summary(&[]), SkillSummary::default());
    }

    #[test]
    fn test_summary_average_rounds_half_up() {
        let mut skills = Portfolio::default().skills;
        skills.truncate(2);
        skills[0].level = 70;
        skills[1].level = 71;
        assert_eq!(skill_summary(&skills).average, 71);
    }

    #[test]
    fn test_level_above_hundred_rejected() {
        let mut portfolio = Portfolio::default();
        portfolio.skills[3].level = 101;
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::InvalidLevel { level: 101, .. })
        ));
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let mut portfolio = Portfolio::default();
        portfolio.projects[1].id = 1;
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::DuplicateId { kind: "project", .. })
        ));
    }

    #[test]
    fn test_empty_dialogue_rejected() {
        let mut portfolio = Portfolio::default();
        portfolio.dialogue.clear();
        assert!(matches!(
            portfolio.validate(),
            Err(ContentError::Dialogue(SequencerError::EmptyScript))
        ));
    }

    #[test]
    fn test_skill_without_experience_deserializes() {
        let json = r##"{"name":"Go","category":"Language","level":60,"description":"d"}"##;
        let skill: Skill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.experience, None);
        assert_eq!(skill.color, "");
    }

    #[test]
    fn test_to_json_carries_version() {
        let json = Portfolio::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], CONTENT_VERSION);
        assert_eq!(value["portfolio"]["owner"], "Josaiah Borres");
    }
}
