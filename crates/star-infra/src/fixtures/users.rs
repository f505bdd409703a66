use star_core::domain::{PostAuthor, User};

const USERS: [(&str, &str, u32); 5] = [
    ("john_doe", "john", 5),
    ("jane_smith", "jane", 3),
    ("alex_chen", "alex", 7),
    ("sarah_wilson", "sarah", 4),
    ("mike_brown", "mike", 6),
];

/// The five fixture members.
pub fn fixture_users() -> Vec<User> {
    USERS
        .iter()
        .enumerate()
        .map(|(i, (username, mailbox, level))| User {
            id: format!("user-{}", i + 1),
            username: username.to_string(),
            email: format!("{mailbox}@uwaterloo.ca"),
            avatar: Some(format!("https://i.pravatar.cc/150?img={}", i + 1)),
            level: *level,
        })
        .collect()
}

/// Author snapshots of the fixture members, in the same order.
pub fn fixture_authors() -> Vec<PostAuthor> {
    fixture_users().iter().map(User::as_author).collect()
}
