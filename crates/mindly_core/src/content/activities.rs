//! Activity suggestions keyed by locale and emotion.
//!
//! Tables are built once per process on first access.

use crate::content::locale::Locale;
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

type ActivityTable = HashMap<&'static str, &'static [&'static str]>;

static ACTIVITIES_EN: Lazy<ActivityTable> = Lazy::new(|| {
    HashMap::from([
        (
            "happy",
            &[
                "Share your good news with a friend.",
                "Write down three things that made you smile today.",
                "Take a photo of something that sparks joy.",
            ] as &[&str],
        ),
        (
            "amazing",
            &[
                "Capture this moment in a few sentences.",
                "Plan something to look forward to this week.",
            ] as &[&str],
        ),
        (
            "love",
            &[
                "Send a kind message to someone you care about.",
                "Cook a favourite meal for someone.",
            ] as &[&str],
        ),
        (
            "satisfied",
            &[
                "Reward yourself with a short break.",
                "Note what went well so you can repeat it.",
            ] as &[&str],
        ),
        (
            "neutral",
            &[
                "Go for a ten-minute walk outside.",
                "Try a new song or podcast.",
            ] as &[&str],
        ),
        (
            "sad",
            &[
                "Call someone you trust.",
                "Wrap up in a blanket with a warm drink.",
                "Write a letter to yourself as a friend would.",
            ] as &[&str],
        ),
        (
            "worried",
            &[
                "Try box breathing: in 4, hold 4, out 4, hold 4.",
                "List what you can and cannot control.",
            ] as &[&str],
        ),
        (
            "angry",
            &[
                "Take a brisk walk or do some stretches.",
                "Write the feeling down, then tear up the page.",
            ] as &[&str],
        ),
        (
            "tired",
            &[
                "Take a 20-minute nap.",
                "Drink a glass of water and step away from screens.",
            ] as &[&str],
        ),
    ])
});

static ACTIVITIES_VI: Lazy<ActivityTable> = Lazy::new(|| {
    HashMap::from([
        (
            "happy",
            &[
                "Chia sẻ tin vui với một người bạn.",
                "Viết ra ba điều khiến bạn mỉm cười hôm nay.",
            ] as &[&str],
        ),
        (
            "amazing",
            &[
                "Ghi lại khoảnh khắc này bằng vài câu.",
                "Lên kế hoạch cho một điều đáng mong chờ trong tuần.",
            ] as &[&str],
        ),
        (
            "love",
            &[
                "Gửi một lời nhắn yêu thương đến người bạn quan tâm.",
                "Nấu một món ăn yêu thích cho ai đó.",
            ] as &[&str],
        ),
        (
            "satisfied",
            &[
                "Tự thưởng cho mình một khoảng nghỉ ngắn.",
                "Ghi lại điều đã làm tốt để lặp lại.",
            ] as &[&str],
        ),
        (
            "neutral",
            &[
                "Đi dạo ngoài trời mười phút.",
                "Thử nghe một bài hát mới.",
            ] as &[&str],
        ),
        (
            "sad",
            &[
                "Gọi cho người bạn tin tưởng.",
                "Cuộn mình trong chăn với một ly đồ uống ấm.",
            ] as &[&str],
        ),
        (
            "worried",
            &[
                "Thử hít thở hộp: hít 4, giữ 4, thở 4, giữ 4.",
                "Liệt kê những gì bạn có thể và không thể kiểm soát.",
            ] as &[&str],
        ),
        (
            "angry",
            &[
                "Đi bộ nhanh hoặc giãn cơ một chút.",
                "Viết cảm xúc ra giấy rồi xé bỏ.",
            ] as &[&str],
        ),
        (
            "tired",
            &[
                "Chợp mắt 20 phút.",
                "Uống một ly nước và rời xa màn hình.",
            ] as &[&str],
        ),
    ])
});

fn table(locale: Locale) -> &'static ActivityTable {
    match locale {
        Locale::En => &ACTIVITIES_EN,
        Locale::Vi => &ACTIVITIES_VI,
    }
}

/// All suggestions for `emotion_id`; empty for unknown ids.
pub fn activities_for(locale: Locale, emotion_id: &str) -> &'static [&'static str] {
    table(locale).get(emotion_id).copied().unwrap_or(&[])
}

/// Picks one suggestion uniformly at random.
///
/// Returns `None` when no suggestion exists for `emotion_id`.
pub fn suggest_activity<R: Rng + ?Sized>(
    locale: Locale,
    emotion_id: &str,
    rng: &mut R,
) -> Option<&'static str> {
    activities_for(locale, emotion_id).choose(rng).copied()
}
