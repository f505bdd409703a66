use chrono::{DateTime, NaiveDate, Utc};

use star_core::domain::{Post, PostAuthor, PostCategory, PostStats, PostStatus};

use super::users::fixture_authors;

struct Seed {
    id: &'static str,
    author: usize,
    category: PostCategory,
    title: &'static str,
    content: &'static str,
    images: &'static [&'static str],
    stats: [u64; 4],
    created: (u32, u32, u32, u32),
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: "post-1",
        author: 0,
        category: PostCategory::HousingRequest,
        title: "Looking for 1BR near UWaterloo campus",
        content: "Hi! I'm a grad student looking for a 1-bedroom apartment near UWaterloo campus for Fall 2024. Budget is $1200-1500/month. Prefer a quiet area with good internet. Non-smoker, no pets. Please let me know if you have anything available!",
        images: &["https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800"],
        stats: [245, 12, 8, 5],
        created: (1, 15, 10, 30),
    },
    Seed {
        id: "post-2",
        author: 1,
        category: PostCategory::HousingRequest,
        title: "Roommate needed for 2BR apartment",
        content: "Looking for a roommate to share a 2BR apartment starting May 2024. Rent is $800/month per person, utilities included. Close to university, gym in building, parking available. Prefer someone clean and respectful.",
        images: &[],
        stats: [189, 8, 4, 12],
        created: (1, 16, 14, 20),
    },
    Seed {
        id: "post-3",
        author: 2,
        category: PostCategory::HousingRequest,
        title: "Looking for pet-friendly housing",
        content: "Engineering student with a small dog looking for pet-friendly housing near campus. Budget up to $1400/month. Willing to pay pet deposit. Looking for May-August 2024 term.",
        images: &["https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=800"],
        stats: [156, 15, 6, 8],
        created: (1, 17, 9, 15),
    },
    Seed {
        id: "post-4",
        author: 3,
        category: PostCategory::Sublet,
        title: "Sublet Available: 1BR near campus - May-Aug 2024",
        content: "Subletting my 1-bedroom apartment from May to August 2024. $1300/month, utilities included. 10-minute walk to campus, in-unit laundry, gym access, parking spot available. Fully furnished. Available for viewing!",
        images: &[
            "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800",
            "https://images.unsplash.com/photo-1522771739844-6a9f6d5f14af?w=800",
        ],
        stats: [342, 28, 15, 18],
        created: (1, 14, 16, 45),
    },
    Seed {
        id: "post-5",
        author: 4,
        category: PostCategory::Sublet,
        title: "Room available in 4BR house - $650/month",
        content: "One room available in a 4-bedroom house. $650/month + utilities (~$100). Great location, 15-min bus ride to campus. Shared kitchen and living room. Current roommates are all students. Looking for someone starting February 2024.",
        images: &["https://images.unsplash.com/photo-1556912173-3bb406ef7e77?w=800"],
        stats: [278, 19, 11, 22],
        created: (1, 16, 11, 30),
    },
    Seed {
        id: "post-6",
        author: 0,
        category: PostCategory::Sublet,
        title: "Luxury 2BR Condo Sublet - Short Term Available",
        content: "Subletting my 2BR condo for the summer (May-August 2024). $1800/month. Brand new building with rooftop pool, gym, study rooms. Walking distance to campus. Fully furnished with modern appliances. Perfect for couples or friends.",
        images: &[
            "https://images.unsplash.com/photo-1565182999561-18d7dc61c393?w=800",
            "https://images.unsplash.com/photo-1556912172-45b7abe8b7e1?w=800",
            "https://images.unsplash.com/photo-1560185893-a55cbc8c57e8?w=800",
        ],
        stats: [456, 42, 23, 31],
        created: (1, 13, 8, 0),
    },
];

fn at_2024(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2024, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn build(seed: &Seed, authors: &[PostAuthor]) -> Option<Post> {
    let (month, day, hour, minute) = seed.created;
    let created_at = at_2024(month, day, hour, minute);
    let [views, likes, stars, replies] = seed.stats;

    Some(Post {
        id: seed.id.to_string(),
        created_at,
        updated_at: created_at,
        author: authors.get(seed.author)?.clone(),
        stats: PostStats {
            views,
            likes,
            stars,
            replies,
        },
        title: seed.title.to_string(),
        content: seed.content.to_string(),
        category: seed.category,
        status: PostStatus::Published,
        images: seed.images.iter().map(|url| url.to_string()).collect(),
    })
}

/// All fixture posts, newest first.
pub fn fixture_posts() -> Vec<Post> {
    let authors = fixture_authors();
    let mut posts: Vec<Post> = SEEDS
        .iter()
        .filter_map(|seed| build(seed, &authors))
        .collect();
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts
}
