use serde::{Deserialize, Serialize};

use super::category::Category;

/// Catalogue entry for the home page and admin course list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub category_id: Option<u64>,
}

impl Course {
    /// Category label for display. Some backend serializers leak a Java
    /// `toString()` (contains '@') instead of the name; that reads as absent.
    pub fn category_name(&self) -> Option<&str> {
        let name = match self.category.as_ref()? {
            CategoryRef::Name(name) => name.as_str(),
            CategoryRef::Full(category) => category.name.as_str(),
        };
        if name.contains('@') {
            None
        } else {
            Some(name)
        }
    }

    /// True when the course belongs to the given category, whichever shape
    /// the backend used to say so.
    pub fn belongs_to(&self, category_id: u64) -> bool {
        self.category_id == Some(category_id)
            || matches!(&self.category, Some(CategoryRef::Full(category)) if category.id == category_id)
    }
}

/// The `category` field arrives either as a bare name or a full object.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Full(Category),
    Name(String),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub published: bool,
}

// ---------------------------------------------------------------------------
// Course structure (GET /course/{id}): learning paths > chapters > lessons >
// resources, each carrying a position for ordering.
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseContent {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub cur_learning_path: Option<CurLearningPath>,
}

impl CourseContent {
    /// Sorts every level of the tree by `position`. The backend does not
    /// guarantee order on the wire.
    pub fn normalized(mut self) -> Self {
        if let Some(cur) = self.cur_learning_path.as_mut() {
            cur.learning_paths.sort_by_key(|p| p.position);
            for path in &mut cur.learning_paths {
                path.chapters.sort_by_key(|c| c.position);
                for chapter in &mut path.chapters {
                    chapter.lessons.sort_by_key(|l| l.position);
                    for lesson in &mut chapter.lessons {
                        lesson.resources.sort_by_key(|r| r.position);
                    }
                }
            }
        }
        self
    }

    pub fn learning_paths(&self) -> &[LearningPath] {
        self.cur_learning_path
            .as_ref()
            .map(|c| c.learning_paths.as_slice())
            .unwrap_or(&[])
    }

    /// (paths, chapters, lessons, total minutes)
    pub fn stats(&self) -> (usize, usize, usize, u32) {
        let paths = self.learning_paths();
        let mut chapters = 0;
        let mut lessons = 0;
        let mut duration = 0;
        for path in paths {
            chapters += path.chapters.len();
            for chapter in &path.chapters {
                lessons += chapter.lessons.len();
                duration += chapter.lessons.iter().map(|l| l.duration).sum::<u32>();
            }
        }
        (paths.len(), chapters, lessons, duration)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurLearningPath {
    #[serde(default)]
    pub learning_paths: Vec<LearningPath>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub resources: Vec<ResourceItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub position: i32,
}

// --- course-builder create payloads ---

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLearningPath {
    pub title: String,
    pub position: i32,
    pub course_id: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChapter {
    pub title: String,
    pub position: i32,
    pub learning_path_id: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLesson {
    pub title: String,
    pub position: i32,
    pub duration: u32,
    pub chapter_id: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub name: String,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub size: Option<u64>,
    pub lesson_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ref_accepts_object_and_string() {
        let full: Course = serde_json::from_str(
            r#"{"id":1,"title":"Rust","category":{"id":2,"name":"Lập trình"}}"#,
        )
        .unwrap();
        assert_eq!(full.category_name(), Some("Lập trình"));

        let flat: Course =
            serde_json::from_str(r#"{"id":1,"title":"Rust","category":"Toán"}"#).unwrap();
        assert_eq!(flat.category_name(), Some("Toán"));
    }

    #[test]
    fn belongs_to_checks_both_category_shapes() {
        let by_id: Course =
            serde_json::from_str(r#"{"id":1,"title":"Rust","categoryId":2}"#).unwrap();
        assert!(by_id.belongs_to(2));
        assert!(!by_id.belongs_to(3));

        let by_object: Course = serde_json::from_str(
            r#"{"id":1,"title":"Rust","category":{"id":2,"name":"Lập trình"}}"#,
        )
        .unwrap();
        assert!(by_object.belongs_to(2));
    }

    #[test]
    fn leaked_java_tostring_reads_as_no_category() {
        let course: Course = serde_json::from_str(
            r#"{"id":1,"title":"Rust","category":"com.learnmap.Category@3f5a1b"}"#,
        )
        .unwrap();
        assert_eq!(course.category_name(), None);
    }

    #[test]
    fn normalized_orders_every_level_by_position() {
        let content = serde_json::from_str::<CourseContent>(
            r#"{
                "id": 1,
                "curLearningPath": {"learningPaths": [
                    {"id": 2, "title": "Nâng cao", "position": 2, "chapters": []},
                    {"id": 1, "title": "Cơ bản", "position": 1, "chapters": [
                        {"id": 20, "title": "B", "position": 2, "lessons": []},
                        {"id": 10, "title": "A", "position": 1, "lessons": []}
                    ]}
                ]}
            }"#,
        )
        .unwrap()
        .normalized();

        let paths = content.learning_paths();
        assert_eq!(paths[0].title, "Cơ bản");
        assert_eq!(paths[1].title, "Nâng cao");
        assert_eq!(paths[0].chapters[0].title, "A");
    }

    #[test]
    fn stats_walks_the_whole_tree() {
        let content: CourseContent = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Rust",
                "curLearningPath": {"learningPaths": [{
                    "id": 10, "title": "Cơ bản", "position": 1,
                    "chapters": [{
                        "id": 20, "title": "Chương 1", "position": 1,
                        "lessons": [
                            {"id": 30, "title": "Bài 1", "position": 1, "duration": 25},
                            {"id": 31, "title": "Bài 2", "position": 2, "duration": 40}
                        ]
                    }]
                }]}
            }"#,
        )
        .unwrap();
        assert_eq!(content.stats(), (1, 1, 2, 65));
    }
}
