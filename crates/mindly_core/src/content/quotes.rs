//! Daily quote tables.

use crate::content::locale::Locale;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

const QUOTES_EN: &[Quote] = &[
    Quote {
        text: "Feelings are just visitors. Let them come and go.",
        author: "Mooji",
    },
    Quote {
        text: "You don't have to control your thoughts. You just have to stop letting them control you.",
        author: "Dan Millman",
    },
    Quote {
        text: "There is hope, even when your brain tells you there isn't.",
        author: "John Green",
    },
    Quote {
        text: "Almost everything will work again if you unplug it for a few minutes, including you.",
        author: "Anne Lamott",
    },
    Quote {
        text: "Happiness can be found even in the darkest of times, if one only remembers to turn on the light.",
        author: "J.K. Rowling",
    },
    Quote {
        text: "Self-care is how you take your power back.",
        author: "Lalah Delia",
    },
    Quote {
        text: "What lies behind us and what lies before us are tiny matters compared to what lies within us.",
        author: "Ralph Waldo Emerson",
    },
];

const QUOTES_VI: &[Quote] = &[
    Quote {
        text: "Cảm xúc chỉ là những vị khách. Hãy để chúng đến rồi đi.",
        author: "Mooji",
    },
    Quote {
        text: "Không có con đường nào dẫn đến hạnh phúc, hạnh phúc chính là con đường.",
        author: "Thích Nhất Hạnh",
    },
    Quote {
        text: "Luôn có hy vọng, ngay cả khi bộ não nói với bạn rằng không có.",
        author: "John Green",
    },
    Quote {
        text: "Hầu như mọi thứ sẽ hoạt động lại nếu bạn rút phích cắm vài phút, kể cả bạn.",
        author: "Anne Lamott",
    },
    Quote {
        text: "Chăm sóc bản thân là cách bạn lấy lại sức mạnh của mình.",
        author: "Lalah Delia",
    },
];

/// Full quote table for `locale`.
pub fn quotes(locale: Locale) -> &'static [Quote] {
    match locale {
        Locale::En => QUOTES_EN,
        Locale::Vi => QUOTES_VI,
    }
}

/// Quote of the day: `quotes[day_of_month % len]`.
pub fn daily_quote(locale: Locale, today: NaiveDate) -> Option<Quote> {
    let table = quotes(locale);
    if table.is_empty() {
        return None;
    }
    table.get(today.day() as usize % table.len()).copied()
}
