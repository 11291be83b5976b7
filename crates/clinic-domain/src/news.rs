//! Health news feed

use clinic_record::{Record, RecordError, RecordId, RecordSource, RecordStatus, SourceError, StatusColor};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Specialty a news item is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    /// Heart and circulation
    Cardiology,
    /// Clinical technology
    Technology,
    /// Hormones and metabolism
    Endocrinology,
}

impl RecordStatus for NewsCategory {
    const ALL: &'static [Self] = &[Self::Cardiology, Self::Technology, Self::Endocrinology];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Cardiology => "cardiology",
            Self::Technology => "technology",
            Self::Endocrinology => "endocrinology",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Cardiology => "Cardiology",
            Self::Technology => "Technology",
            Self::Endocrinology => "Endocrinology",
        }
    }

    fn color(&self) -> StatusColor {
        match self {
            Self::Cardiology | Self::Technology | Self::Endocrinology => StatusColor::Info,
        }
    }
}

impl Display for NewsCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NewsCategory {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RecordError::unknown_status(NewsItem::KIND, s))
    }
}

/// One article of the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Record id
    pub id: RecordId,
    /// Headline
    pub title: String,
    /// Teaser text
    pub summary: String,
    /// Relative publication time as displayed
    pub date: String,
    /// Specialty
    pub category: NewsCategory,
    /// Byline
    pub author: String,
    /// Byline avatar path
    pub author_avatar: String,
    /// Like count
    pub likes: u32,
    /// Comment count
    pub comments: u32,
}

impl Record for NewsItem {
    type Status = NewsCategory;

    const KIND: &'static str = "news";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> NewsCategory {
        self.category
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    title: &str,
    summary: &str,
    date: &str,
    category: NewsCategory,
    author: &str,
    avatar: u8,
    (likes, comments): (u32, u32),
) -> NewsItem {
    NewsItem {
        id: RecordId::new(id),
        title: title.to_string(),
        summary: summary.to_string(),
        date: date.to_string(),
        category,
        author: author.to_string(),
        author_avatar: format!("/assets/images/avatars/avatar_{avatar}.jpg"),
        likes,
        comments,
    }
}

static HEALTH_NEWS: Lazy<Vec<NewsItem>> = Lazy::new(|| {
    vec![
        item(
            "1",
            "Breakthrough in Heart Disease Treatment",
            "New study shows 40% reduction in heart attack risk with innovative therapy.",
            "2 hours ago",
            NewsCategory::Cardiology,
            "Dr. Sarah Johnson",
            1,
            (42, 8),
        ),
        item(
            "2",
            "AI Predicts Patient Deterioration 24 Hours in Advance",
            "Machine learning model helps hospitals improve patient outcomes with early warning system.",
            "5 hours ago",
            NewsCategory::Technology,
            "Dr. Michael Chen",
            2,
            (36, 12),
        ),
        item(
            "3",
            "New Guidelines for Diabetes Management Released",
            "Updated recommendations include personalized treatment plans and continuous glucose monitoring.",
            "1 day ago",
            NewsCategory::Endocrinology,
            "Dr. Emily Rodriguez",
            3,
            (28, 5),
        ),
    ]
});

/// The curated feed, newest first
#[must_use]
pub fn health_news() -> &'static [NewsItem] {
    &HEALTH_NEWS
}

/// Record source over the curated feed
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthNewsSource;

impl RecordSource<NewsItem> for HealthNewsSource {
    fn load(&self) -> Result<Vec<NewsItem>, SourceError> {
        Ok(health_news().to_vec())
    }
}
