//! Seed records for each page.
//!
//! Relative timestamps ("2 hours ago") are computed from the `now` passed in
//! so results stay deterministic under test.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};

use happyheads_core::filter::RecordSource;
use happyheads_core::records::{
    Appointment, AppointmentStatus, ContentItem, ContentType, JournalEntry, ManagedUser,
    MeditationCategory, MeditationSession, MoodLevel, Post, PostAuthor, SessionType, Therapist,
    UserStatus,
};
use happyheads_core::Result;

/// Record source serving a fixed snapshot.
#[derive(Debug, Clone)]
pub struct StaticRecordSource<R> {
    records: Vec<R>,
}

impl<R> StaticRecordSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl<R> RecordSource<R> for StaticRecordSource<R>
where
    R: Clone + Send + Sync,
{
    async fn load_all(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn pexels(photo: u32, width: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w={width}"
    )
}

pub fn community_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            author: PostAuthor {
                name: "Sarah Chen".to_string(),
                avatar: Some(pexels(3760067, 100)),
                is_verified: true,
            },
            title: "How I overcame my morning anxiety".to_string(),
            content: "I wanted to share my journey with morning anxiety and the techniques that have helped me start my days more peacefully. For months, I would wake up with this overwhelming sense of dread...".to_string(),
            category: "anxiety".to_string(),
            timestamp: now - Duration::hours(2),
            likes: 24,
            comments: 8,
            is_liked: false,
            tags: strings(&["anxiety", "morning routine", "coping strategies"]),
        },
        Post {
            id: "2".to_string(),
            author: PostAuthor {
                name: "Marcus Johnson".to_string(),
                avatar: Some(pexels(3771115, 100)),
                is_verified: false,
            },
            title: "Meditation changed my life - 30 day challenge results".to_string(),
            content: "Just completed a 30-day meditation challenge and wanted to share the incredible changes I've experienced. When I started, I could barely sit still for 2 minutes...".to_string(),
            category: "mindfulness".to_string(),
            timestamp: now - Duration::hours(5),
            likes: 42,
            comments: 15,
            is_liked: true,
            tags: strings(&["meditation", "mindfulness", "challenge"]),
        },
        Post {
            id: "3".to_string(),
            author: PostAuthor {
                name: "Emily Rodriguez".to_string(),
                avatar: Some(pexels(3760263, 100)),
                is_verified: false,
            },
            title: "Support needed: Dealing with work stress".to_string(),
            content: "Hi everyone, I'm going through a particularly stressful period at work and could use some advice. The workload has increased significantly and I'm struggling to maintain balance...".to_string(),
            category: "support".to_string(),
            timestamp: now - Duration::hours(8),
            likes: 18,
            comments: 12,
            is_liked: false,
            tags: strings(&["work stress", "support", "balance"]),
        },
        Post {
            id: "4".to_string(),
            author: PostAuthor {
                name: "David Kim".to_string(),
                avatar: Some(pexels(3822864, 100)),
                is_verified: false,
            },
            title: "Weekly check-in: How is everyone doing?".to_string(),
            content: "It's been a week since our last community check-in. I thought it would be nice to see how everyone is feeling and what victories, big or small, we've had this week...".to_string(),
            category: "general".to_string(),
            timestamp: now - Duration::days(1),
            likes: 35,
            comments: 23,
            is_liked: true,
            tags: strings(&["check-in", "community", "support"]),
        },
    ]
}

pub fn content_items() -> Vec<ContentItem> {
    vec![
        ContentItem {
            id: "1".to_string(),
            title: "Understanding Anxiety: A Comprehensive Guide".to_string(),
            description: "Learn about the science behind anxiety and practical strategies for managing anxious thoughts and feelings.".to_string(),
            kind: ContentType::Article,
            category: "anxiety".to_string(),
            duration: Some(8),
            rating: 4.8,
            author: "Dr. Sarah Mitchell".to_string(),
            thumbnail: pexels(3760067, 400),
            tags: strings(&["anxiety", "coping", "mental health"]),
            is_favorite: true,
            published_date: date(2024, 1, 15),
        },
        ContentItem {
            id: "2".to_string(),
            title: "Mindful Breathing for Stress Relief".to_string(),
            description: "A guided video session teaching effective breathing techniques to reduce stress and promote relaxation.".to_string(),
            kind: ContentType::Video,
            category: "mindfulness".to_string(),
            duration: Some(12),
            rating: 4.9,
            author: "Mark Thompson".to_string(),
            thumbnail: pexels(3822622, 400),
            tags: strings(&["breathing", "stress relief", "mindfulness"]),
            is_favorite: false,
            published_date: date(2024, 1, 20),
        },
        ContentItem {
            id: "3".to_string(),
            title: "Sleep Meditation for Better Rest".to_string(),
            description: "Calming audio meditation designed to help you fall asleep faster and improve sleep quality.".to_string(),
            kind: ContentType::Audio,
            category: "sleep".to_string(),
            duration: Some(25),
            rating: 4.7,
            author: "Luna Williams".to_string(),
            thumbnail: pexels(3771069, 400),
            tags: strings(&["sleep", "meditation", "relaxation"]),
            is_favorite: true,
            published_date: date(2024, 1, 18),
        },
        ContentItem {
            id: "4".to_string(),
            title: "Building Self-Esteem Through Daily Practices".to_string(),
            description: "Practical exercises and techniques to boost confidence and develop a healthier relationship with yourself.".to_string(),
            kind: ContentType::Exercise,
            category: "self-esteem".to_string(),
            duration: Some(15),
            rating: 4.6,
            author: "Dr. James Rodriguez".to_string(),
            thumbnail: pexels(3771115, 400),
            tags: strings(&["self-esteem", "confidence", "personal growth"]),
            is_favorite: false,
            published_date: date(2024, 1, 22),
        },
        ContentItem {
            id: "5".to_string(),
            title: "Managing Depression: Hope and Healing".to_string(),
            description: "Understanding depression and evidence-based strategies for recovery and maintaining mental wellness.".to_string(),
            kind: ContentType::Article,
            category: "depression".to_string(),
            duration: Some(12),
            rating: 4.9,
            author: "Dr. Emily Chen".to_string(),
            thumbnail: pexels(3760263, 400),
            tags: strings(&["depression", "recovery", "therapy"]),
            is_favorite: false,
            published_date: date(2024, 1, 25),
        },
        ContentItem {
            id: "6".to_string(),
            title: "Progressive Muscle Relaxation".to_string(),
            description: "Learn this powerful technique to release physical tension and achieve deep relaxation.".to_string(),
            kind: ContentType::Video,
            category: "relaxation".to_string(),
            duration: Some(18),
            rating: 4.8,
            author: "Rachel Green".to_string(),
            thumbnail: pexels(3822864, 400),
            tags: strings(&["relaxation", "muscle tension", "stress"]),
            is_favorite: true,
            published_date: date(2024, 1, 28),
        },
    ]
}

pub fn journal_entries(now: DateTime<Utc>) -> Vec<JournalEntry> {
    vec![
        JournalEntry {
            id: "1".to_string(),
            title: "A Productive Monday".to_string(),
            content: "Today was surprisingly productive. I managed to complete all my work tasks and even had time for a 30-minute walk. The fresh air really helped clear my mind and I feel more energized than I have in weeks. I think establishing a morning routine is really starting to pay off.".to_string(),
            date: now,
            mood: Some(MoodLevel::Good),
            tags: strings(&["productivity", "wellness", "exercise"]),
        },
        JournalEntry {
            id: "2".to_string(),
            title: "Weekend Reflections".to_string(),
            content: "Spent the weekend with family and friends. It was wonderful to disconnect from work and just enjoy being present. We had a barbecue in the backyard and played some board games. Simple moments like these remind me what really matters in life.".to_string(),
            date: now - Duration::days(2),
            mood: Some(MoodLevel::Excellent),
            tags: strings(&["family", "gratitude", "relaxation"]),
        },
        JournalEntry {
            id: "3".to_string(),
            title: "Challenging Day at Work".to_string(),
            content: "Work was particularly stressful today. Had to deal with a difficult client and felt overwhelmed by my workload. However, I practiced some breathing exercises during my lunch break which helped me regain my composure. I'm learning that it's okay to have tough days.".to_string(),
            date: now - Duration::days(4),
            mood: Some(MoodLevel::NotGreat),
            tags: strings(&["work", "stress", "mindfulness"]),
        },
    ]
}

pub fn meditation_sessions() -> Vec<MeditationSession> {
    let session = |id: &str,
                   title: &str,
                   description: &str,
                   duration: u32,
                   category: MeditationCategory| MeditationSession {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration,
        category,
    };
    vec![
        session("1", "Deep Breathing Exercise", "Simple breathing technique to reduce stress and anxiety", 5, MeditationCategory::Breathing),
        session("2", "Morning Meditation", "Start your day with mindful awareness and positive intention", 10, MeditationCategory::Meditation),
        session("3", "Sleep Preparation", "Gentle meditation to prepare your mind and body for rest", 15, MeditationCategory::Sleep),
        session("4", "Focus Enhancement", "Improve concentration and mental clarity for work or study", 12, MeditationCategory::Focus),
        session("5", "Anxiety Relief", "Calming techniques to manage worry and overwhelm", 8, MeditationCategory::Anxiety),
        session("6", "Nature Connection", "Connect with the healing power of nature through visualization", 20, MeditationCategory::Meditation),
        session("7", "Mountain Visualization", "Find strength and stability through mountain meditation", 15, MeditationCategory::Meditation),
        session("8", "4-7-8 Breathing", "Powerful breathing pattern for instant relaxation", 3, MeditationCategory::Breathing),
    ]
}

fn availability(days: [(&str, &[&str]); 5]) -> BTreeMap<String, Vec<String>> {
    days.into_iter()
        .map(|(day, slots)| (day.to_string(), strings(slots)))
        .collect()
}

pub fn therapists() -> Vec<Therapist> {
    vec![
        Therapist {
            id: "1".to_string(),
            name: "Dr. Sarah Mitchell".to_string(),
            title: "Licensed Clinical Psychologist".to_string(),
            specialties: strings(&["Anxiety", "Depression", "CBT", "Trauma"]),
            rating: 4.9,
            review_count: 127,
            avatar: pexels(3760067, 200),
            bio: "Dr. Mitchell specializes in cognitive behavioral therapy and has over 10 years of experience helping clients overcome anxiety and depression.".to_string(),
            experience: 10,
            session_types: vec![SessionType::Video, SessionType::Phone, SessionType::InPerson],
            hourly_rate: 120,
            location: Some("San Francisco, CA".to_string()),
            availability: availability([
                ("Monday", &["9:00 AM", "10:00 AM", "2:00 PM", "3:00 PM"]),
                ("Tuesday", &["9:00 AM", "11:00 AM", "1:00 PM", "4:00 PM"]),
                ("Wednesday", &["10:00 AM", "2:00 PM", "3:00 PM"]),
                ("Thursday", &["9:00 AM", "10:00 AM", "1:00 PM", "2:00 PM"]),
                ("Friday", &["9:00 AM", "11:00 AM", "3:00 PM"]),
            ]),
        },
        Therapist {
            id: "2".to_string(),
            name: "Dr. Marcus Thompson".to_string(),
            title: "Licensed Marriage & Family Therapist".to_string(),
            specialties: strings(&["Relationships", "Family Therapy", "Communication", "Stress"]),
            rating: 4.8,
            review_count: 89,
            avatar: pexels(3771115, 200),
            bio: "Dr. Thompson focuses on helping individuals and couples build stronger relationships and improve communication patterns.".to_string(),
            experience: 8,
            session_types: vec![SessionType::Video, SessionType::Phone],
            hourly_rate: 110,
            location: None,
            availability: availability([
                ("Monday", &["10:00 AM", "2:00 PM", "4:00 PM"]),
                ("Tuesday", &["9:00 AM", "1:00 PM", "3:00 PM"]),
                ("Wednesday", &["11:00 AM", "2:00 PM", "5:00 PM"]),
                ("Thursday", &["9:00 AM", "12:00 PM", "3:00 PM"]),
                ("Friday", &["10:00 AM", "1:00 PM", "4:00 PM"]),
            ]),
        },
        Therapist {
            id: "3".to_string(),
            name: "Dr. Emily Rodriguez".to_string(),
            title: "Licensed Clinical Social Worker".to_string(),
            specialties: strings(&["Trauma", "PTSD", "Mindfulness", "Self-Esteem"]),
            rating: 4.9,
            review_count: 156,
            avatar: pexels(3760263, 200),
            bio: "Dr. Rodriguez specializes in trauma-informed care and uses mindfulness-based approaches to help clients heal and grow.".to_string(),
            experience: 12,
            session_types: vec![SessionType::Video, SessionType::InPerson],
            hourly_rate: 130,
            location: Some("Los Angeles, CA".to_string()),
            availability: availability([
                ("Monday", &["9:00 AM", "11:00 AM", "3:00 PM"]),
                ("Tuesday", &["10:00 AM", "2:00 PM", "4:00 PM"]),
                ("Wednesday", &["9:00 AM", "1:00 PM", "3:00 PM"]),
                ("Thursday", &["11:00 AM", "2:00 PM", "5:00 PM"]),
                ("Friday", &["9:00 AM", "12:00 PM", "2:00 PM"]),
            ]),
        },
    ]
}

pub fn appointments(today: NaiveDate) -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".to_string(),
            therapist_id: "1".to_string(),
            date: today + Duration::days(2),
            time: "2:00 PM".to_string(),
            session_type: SessionType::Video,
            status: AppointmentStatus::Upcoming,
        },
        Appointment {
            id: "2".to_string(),
            therapist_id: "2".to_string(),
            date: today - Duration::days(3),
            time: "10:00 AM".to_string(),
            session_type: SessionType::Video,
            status: AppointmentStatus::Completed,
        },
    ]
}

pub fn managed_users() -> Vec<ManagedUser> {
    let user = |id: &str,
                name: &str,
                email: &str,
                joined: NaiveDate,
                status: UserStatus,
                last_active: &str| ManagedUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        join_date: joined,
        status,
        last_active: last_active.to_string(),
    };
    vec![
        user("1", "Sarah Chen", "sarah@example.com", date(2024, 1, 28), UserStatus::Active, "2 hours ago"),
        user("2", "Marcus Johnson", "marcus@example.com", date(2024, 1, 27), UserStatus::Active, "1 day ago"),
        user("3", "Emily Rodriguez", "emily@example.com", date(2024, 1, 26), UserStatus::Inactive, "5 days ago"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use happyheads_core::filter::{project, FilterCriteria, Selector, SortKey};

    #[test]
    fn test_anxiety_category_selects_one_post() {
        let posts = community_posts(Utc::now());
        let criteria = FilterCriteria::new().with_category(Selector::only("anxiety"));
        let visible = project(&posts, &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category, "anxiety");
    }

    #[test]
    fn test_meditation_search_finds_sleep_audio() {
        let criteria = FilterCriteria::new()
            .with_search("meditation")
            .with_category(Selector::parse("all"));
        let visible = project(&content_items(), &criteria);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Sleep Meditation for Better Rest");
        assert_eq!(visible[0].kind, ContentType::Audio);
    }

    #[test]
    fn test_most_popular_puts_check_in_first() {
        let posts = community_posts(Utc::now());
        let criteria = FilterCriteria::new().with_sort(SortKey::MostPopular);
        let totals: Vec<u64> = project(&posts, &criteria)
            .iter()
            .map(Post::engagement)
            .collect();
        assert_eq!(totals, vec![58, 57, 32, 30]);
    }

    #[test]
    fn test_most_recent_orders_by_age() {
        let posts = community_posts(Utc::now());
        let criteria = FilterCriteria::new().with_sort(SortKey::MostRecent);
        let ids: Vec<_> = project(&posts, &criteria).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_specialty_filter_is_membership() {
        let criteria = FilterCriteria::new().with_category(Selector::only("Trauma"));
        let names: Vec<_> = project(&therapists(), &criteria)
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Dr. Sarah Mitchell", "Dr. Emily Rodriguez"]);
    }

    #[tokio::test]
    async fn test_static_source_serves_snapshot() {
        let source = StaticRecordSource::new(meditation_sessions());
        assert_eq!(source.load_all().await.unwrap().len(), 8);
    }
}
