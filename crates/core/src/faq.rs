//! Contact page FAQ.

/// One question and its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// FAQ shown on the contact page, in display order.
pub static FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        question: "Buyurtma qancha vaqtda yetkaziladi?",
        answer: "Oddiy yetkazib berish 3-5 ish kuni, tezkor yetkazib berish 1-2 ish kuni ichida amalga oshiriladi.",
    },
    FaqEntry {
        question: "Maxsus o'lchamdagi parda buyurtma qilsa bo'ladimi?",
        answer: "Ha, buyurtma izohida kerakli eni va balandligini yozing. Mutaxassisimiz siz bilan bog'lanadi.",
    },
    FaqEntry {
        question: "Bepul yetkazib berish bormi?",
        answer: "500 000 so'm va undan yuqori buyurtmalar bepul yetkaziladi.",
    },
    FaqEntry {
        question: "Qanday to'lov usullari mavjud?",
        answer: "Naqd pul, bank kartasi, Click va Payme orqali to'lashingiz mumkin.",
    },
    FaqEntry {
        question: "O'rnatish xizmati bormi?",
        answer: "Navoiy shahri bo'ylab karniz va pardalarni o'rnatib beramiz.",
    },
];

/// Which FAQ answer is open. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqState {
    open: Option<usize>,
}

impl FaqState {
    /// State from the `faq` query parameter; out-of-range indexes mean closed.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        let open = raw
            .and_then(|r| r.trim().parse::<usize>().ok())
            .filter(|i| *i < FAQ_ENTRIES.len());
        Self { open }
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// State after clicking `index`: opens it and closes the rest, or closes
    /// it if it was already open.
    #[must_use]
    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    /// Link target for the question at `index`.
    #[must_use]
    pub fn toggle_href(self, index: usize) -> String {
        match self.toggle(index).open {
            Some(i) => format!("/contact?faq={i}#faq-{i}"),
            None => format!("/contact#faq-{index}"),
        }
    }

    /// `-` when open, `+` when closed.
    #[must_use]
    pub fn icon(&self, index: usize) -> &'static str {
        if self.is_open(index) { "-" } else { "+" }
    }
}
