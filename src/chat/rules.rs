//! Keyword-matched reply rules for the portfolio chatbot.
//!
//! No model, no network: a visitor's message is lowercased and scanned
//! against an ordered rule list. The first rule with a matching keyword wins,
//! so ordering is semantic — specific topic rules sit above rules whose
//! keyword is a substring of theirs (e.g. "health" before "care"), and the
//! default fallback is always last.

use tracing::debug;

/// Sentinel keyword marking the fallback rule. Never matched by substring
/// search, only used when no other rule matches.
pub const DEFAULT_KEYWORD: &str = "default";

/// A canned reply with the lowercase keywords that trigger it.
#[derive(Debug, Clone)]
pub struct ReplyRule {
    /// Lowercase keywords matched as substrings of the visitor's input.
    pub keywords: Vec<String>,
    /// The reply returned when any keyword matches.
    pub reply: String,
}

impl ReplyRule {
    fn new(keywords: &[&str], reply: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            reply: reply.to_string(),
        }
    }

    fn is_default(&self) -> bool {
        self.keywords.iter().any(|k| k == DEFAULT_KEYWORD)
    }
}

/// Ordered keyword matcher selecting a canned chatbot response.
///
/// Built once at startup, immutable afterwards. Exactly one rule carries the
/// [`DEFAULT_KEYWORD`] sentinel.
pub struct ReplyResolver {
    rules: Vec<ReplyRule>,
}

impl ReplyResolver {
    /// Create a resolver with the portfolio's canned rule set.
    pub fn default_rules() -> Self {
        let rules = vec![
            ReplyRule::new(
                &["hi", "hello", "hey", "hii"],
                "Hey there! 👋 I'm Sarvesh's virtual assistant. Ask me anything about his skills, projects, or contact details!",
            ),
            ReplyRule::new(
                &["who are you", "what is this", "bot", "chatbot"],
                "I'm a friendly chatbot built for Sarvesh's portfolio website 🤖. I can help you learn about his work and skills!",
            ),
            ReplyRule::new(
                &["name", "your name", "who is sarvesh"],
                "He's Sarvesh S, a B.Tech AI & Data Science student passionate about Machine Learning and Web Development 🚀",
            ),
            ReplyRule::new(
                &["skills", "technologies", "tech stack", "what can you do"],
                "Sarvesh works with Python, Scikit-learn, Pandas, NumPy, Tkinter, HTML, CSS, C++ and Java. He enjoys building ML models and websites 💻",
            ),
            ReplyRule::new(
                &["projects", "project", "work", "portfolio"],
                "Sarvesh has worked on Machine Learning and web-based projects. Two highlights are Bangalore House Price Prediction 🏠📊 and Health Tech Care 🩺💻.",
            ),
            // "health" must stay above any rule containing "care" as a keyword
            ReplyRule::new(
                &["health", "healthtech", "health tech", "medical", "hospital", "care"],
                "Health Tech Care 🩺 is an advanced healthcare project by Sarvesh featuring an Advanced Calling System and GPS Tracking System for emergency care. Check it out: https://github.com/sarveshsundaram26/healthtech-final",
            ),
            ReplyRule::new(
                &["bangalore", "house price", "price prediction", "ml project"],
                "The Bangalore House Price Prediction project uses Machine Learning (Scikit-learn, Pandas, NumPy) to estimate property prices based on location and features 📊",
            ),
            ReplyRule::new(
                &["education", "college", "study", "degree"],
                "Sarvesh is pursuing B.Tech in Artificial Intelligence & Data Science at SNS College of Technology, Coimbatore 🎓",
            ),
            ReplyRule::new(
                &["certifications", "certification", "courses"],
                "Sarvesh has completed two major certifications: a Python Completion certificate and an Analytic Vidhya Data Science course 🧾",
            ),
            ReplyRule::new(
                &["contact", "email", "phone", "github", "reach"],
                "You can contact Sarvesh at 📧 sarveshsundaram26@gmail.com or check his GitHub: https://github.com/sarveshsundaram26",
            ),
            ReplyRule::new(
                &["hire", "internship", "job", "work with you"],
                "Sarvesh is open to internships and project collaborations 🤝 Feel free to reach out!",
            ),
            ReplyRule::new(
                &["bye", "goodbye", "see you"],
                "Thanks for chatting! 👋 Have a great day!",
            ),
            ReplyRule::new(
                &[DEFAULT_KEYWORD],
                "Hmm 🤔 I didn't get that. Try asking about skills, projects (like Health Tech Care), education, or contact info!",
            ),
        ];

        Self { rules }
    }

    /// Create a resolver with only a fallback reply (for testing).
    pub fn with_default_reply(reply: &str) -> Self {
        Self {
            rules: vec![ReplyRule::new(&[DEFAULT_KEYWORD], reply)],
        }
    }

    /// Insert a rule before the default fallback, keeping the sentinel last.
    pub fn add_rule(&mut self, keywords: &[&str], reply: &str) {
        let position = self
            .rules
            .iter()
            .position(|r| r.is_default())
            .unwrap_or(self.rules.len());
        self.rules.insert(position, ReplyRule::new(keywords, reply));
    }

    /// Resolve a visitor message to a canned reply.
    ///
    /// Lowercases the input, scans rules in definition order, and returns the
    /// first rule whose non-sentinel keyword occurs as a substring. Falls
    /// through to the default rule's reply (empty input included). Pure —
    /// same input, same output, no side effects.
    pub fn resolve(&self, input: &str) -> &str {
        let text = input.to_lowercase();

        for rule in &self.rules {
            if rule
                .keywords
                .iter()
                .any(|k| k != DEFAULT_KEYWORD && text.contains(k.as_str()))
            {
                debug!(keyword_count = rule.keywords.len(), "Reply rule matched");
                return &rule.reply;
            }
        }

        self.rules
            .iter()
            .find(|r| r.is_default())
            .map(|r| r.reply.as_str())
            .unwrap_or("")
    }

    /// Reply of the default fallback rule.
    pub fn default_reply(&self) -> &str {
        self.rules
            .iter()
            .find(|r| r.is_default())
            .map(|r| r.reply.as_str())
            .unwrap_or("")
    }
}
