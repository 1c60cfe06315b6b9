use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded turn while warm mode was on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub timestamp: DateTime<Utc>,
    pub user_input: String,
    /// `emotion_negative`, `need`, `physical_sensation`, ... or none.
    pub primary_emotion: Option<String>,
    pub intensity: f32,
}

/// Aggregate view over one user's emotion memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionSummary {
    pub total_interactions: usize,
    /// Most frequent primary emotion and its count.
    pub most_common_emotion: Option<(String, usize)>,
    pub average_intensity: f32,
    /// Oldest first.
    pub recent_emotions: Vec<String>,
    pub last_interaction: DateTime<Utc>,
}

/// Per-user bounded history: a ring buffer per user, oldest evicted first.
#[derive(Debug)]
pub struct EmotionMemory {
    users: HashMap<String, VecDeque<MemoryEntry>>,
    capacity: usize,
}

impl EmotionMemory {
    pub fn new(capacity: usize) -> Self {
        Self {
            users: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append an entry for `user_id`, evicting the oldest at capacity.
    pub fn record(&mut self, user_id: &str, entry: MemoryEntry) {
        let entries = self.users.entry(user_id.to_owned()).or_default();
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Entries for `user_id`, oldest first.
    pub fn entries(&self, user_id: &str) -> impl Iterator<Item = &MemoryEntry> {
        self.users.get(user_id).into_iter().flatten()
    }

    pub fn len(&self, user_id: &str) -> usize {
        self.users.get(user_id).map_or(0, VecDeque::len)
    }

    pub fn is_empty(&self, user_id: &str) -> bool {
        self.len(user_id) == 0
    }

    /// Summarize `user_id`'s history. `None` when nothing was recorded.
    pub fn summary(&self, user_id: &str, recent_window: usize) -> Option<EmotionSummary> {
        let entries = self.users.get(user_id).filter(|e| !e.is_empty())?;
        let last = entries.back()?;

        let emotions: Vec<&str> = entries
            .iter()
            .filter_map(|e| e.primary_emotion.as_deref())
            .collect();

        // Counted in order of first appearance so ties go to the earliest.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for &emotion in &emotions {
            if let Some((_, n)) = counts.iter_mut().find(|(e, _)| *e == emotion) {
                *n += 1;
            } else {
                counts.push((emotion, 1));
            }
        }
        let most_common_emotion = counts
            .iter()
            .fold(None::<(&str, usize)>, |best, &(e, n)| match best {
                Some((_, b)) if b >= n => best,
                _ => Some((e, n)),
            })
            .map(|(e, n)| (e.to_owned(), n));

        let average_intensity =
            entries.iter().map(|e| e.intensity).sum::<f32>() / entries.len() as f32;

        let skip = emotions.len().saturating_sub(recent_window);
        let recent_emotions = emotions[skip..].iter().map(|e| (*e).to_owned()).collect();

        Some(EmotionSummary {
            total_interactions: entries.len(),
            most_common_emotion,
            average_intensity,
            recent_emotions,
            last_interaction: last.timestamp,
        })
    }
}
