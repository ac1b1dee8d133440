//! The weighted fuzzy search index.
//!
//! # Matching model
//!
//! At build time every post is reduced to four token lists: title, excerpt,
//! body text (markdown stripped), and tags. At query time the query is
//! lowercased and split into terms; each term is scored against a field as
//! the best normalized edit distance to any of the field's tokens (the
//! joined field text counts as one more candidate), and the field's
//! distance is the mean over the query terms. A field matches only when
//! its distance stays within the configured threshold.
//!
//! Per-post aggregation is a weighted minimum: the best-matching field
//! wins, discounted by its weight (`distance * (1 - weight)`), so equal
//! textual similarity ranks a title hit ahead of a body hit, and an exact
//! match in any field scores `0.0`.
//!
//! Each post appears at most once per query. Results are sorted ascending
//! by score; equal scores rank the post whose hit came from the
//! higher-weighted field first (an exact title match beats an exact body
//! match even though both score `0.0`), and remaining ties keep corpus
//! order, so repeated queries are deterministic.

use std::sync::Arc;

use jangbu_content::markdown::plain_text;
use jangbu_content::Post;

use crate::config::SearchConfig;
use crate::fuzzy::{FuzzyMatcher, NormalizedLevenshtein};

/// Number of matchable fields per post.
const FIELD_COUNT: usize = 4;

/// Field order: title, excerpt, content, tags.
const FIELD_NAMES: [&str; FIELD_COUNT] = ["title", "excerpt", "content", "tags"];

/// A ranked search hit.
///
/// Pairs the matched post (shared, not copied) with its relevance score in
/// `[0, 1]`: lower is better, `0.0` is an exact match.
#[derive(Debug, Clone)]
pub struct SearchHit {
    /// The matched post.
    pub post: Arc<Post>,
    /// Aggregate relevance score, lower = better.
    pub score: f64,
}

/// One match field's normalized text: individual tokens plus the joined
/// form, so a whole-phrase query can match the field as a unit.
struct FieldText {
    tokens: Vec<String>,
    joined: String,
}

impl FieldText {
    fn new(tokens: Vec<String>) -> Self {
        let joined = tokens.join(" ");
        Self { tokens, joined }
    }
}

/// One post's pre-tokenized match fields.
struct IndexedPost {
    post: Arc<Post>,
    fields: [FieldText; FIELD_COUNT],
}

/// In-memory fuzzy search index over the post corpus.
///
/// The index always reflects exactly the most recently supplied corpus:
/// [`SearchIndex::update_index`] discards and rebuilds the internal
/// structures, there is no partial update. Queries never mutate the index.
pub struct SearchIndex {
    entries: Vec<IndexedPost>,
    config: SearchConfig,
    matcher: Box<dyn FuzzyMatcher>,
}

impl SearchIndex {
    /// Build an index with default configuration and matcher.
    ///
    /// Always succeeds; an empty corpus is valid and yields empty results.
    pub fn build(posts: &[Arc<Post>]) -> Self {
        Self::build_with(posts, SearchConfig::default(), Box::new(NormalizedLevenshtein))
    }

    /// Build an index with explicit configuration.
    pub fn build_with_config(posts: &[Arc<Post>], config: SearchConfig) -> Self {
        Self::build_with(posts, config, Box::new(NormalizedLevenshtein))
    }

    /// Build an index with explicit configuration and matching primitive.
    pub fn build_with(
        posts: &[Arc<Post>],
        config: SearchConfig,
        matcher: Box<dyn FuzzyMatcher>,
    ) -> Self {
        let mut index = Self {
            entries: Vec::new(),
            config,
            matcher,
        };
        index.update_index(posts);
        index
    }

    /// Replace the indexed corpus.
    ///
    /// Rebuilds every internal match structure from `posts`; nothing from
    /// the previous corpus survives. Callers embedding the index in a
    /// concurrent server must serialize this against `search` (build the
    /// replacement index aside and swap it under a write lock).
    pub fn update_index(&mut self, posts: &[Arc<Post>]) {
        self.entries = posts
            .iter()
            .map(|post| IndexedPost {
                post: Arc::clone(post),
                fields: [
                    FieldText::new(tokenize(&post.title)),
                    FieldText::new(tokenize(&post.excerpt)),
                    FieldText::new(tokenize(&plain_text(&post.content))),
                    FieldText::new(post.tags.iter().flat_map(|t| tokenize(t)).collect()),
                ],
            })
            .collect();

        log::debug!("search index rebuilt over {} posts", self.entries.len());
    }

    /// Number of indexed posts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run a fuzzy query, returning hits sorted best-first.
    ///
    /// A trimmed-empty query short-circuits to an empty result without any
    /// matching. When every term falls under the length floor but the query
    /// as a whole clears it (e.g. "금 은"), the whole query is matched as a
    /// single phrase instead, so titles made of short tokens stay reachable.
    /// Pure: the index is never mutated by a query.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut terms: Vec<String> = query
            .split_whitespace()
            .map(clean_token)
            .filter(|t| t.chars().count() >= self.config.min_term_chars)
            .collect();
        if terms.is_empty() {
            let phrase = tokenize(&query).join(" ");
            if phrase.chars().count() < self.config.min_term_chars {
                return Vec::new();
            }
            terms = vec![phrase];
        }

        let weights = [
            self.config.title_weight,
            self.config.excerpt_weight,
            self.config.content_weight,
            self.config.tag_weight,
        ];

        let mut scored: Vec<(SearchHit, f64)> = Vec::new();

        for entry in &self.entries {
            // Best (score, field weight) pair for this post.
            let mut best: Option<(f64, f64)> = None;

            for (field, weight) in entry.fields.iter().zip(weights) {
                let distance = self.field_distance(&terms, field);
                if distance > self.config.threshold {
                    continue;
                }

                let score = distance * (1.0 - weight);
                let better = match best {
                    None => true,
                    Some((s, w)) => score < s || (score == s && weight > w),
                };
                if better {
                    best = Some((score, weight));
                }
            }

            if let Some((score, weight)) = best {
                let hit = SearchHit {
                    post: Arc::clone(&entry.post),
                    score,
                };
                scored.push((hit, weight));
            }
        }

        // Ascending by score; equal scores rank the heavier field first, so
        // an exact title hit beats an exact body hit. The sort is stable,
        // full ties keep corpus order.
        scored.sort_by(|(a, aw), (b, bw)| a.score.total_cmp(&b.score).then(bw.total_cmp(aw)));
        scored.into_iter().map(|(hit, _)| hit).collect()
    }

    /// Mean over the query terms of each term's best distance to any token
    /// of the field, with the joined field text as one more candidate so a
    /// multi-word term can match the field as a unit. A field without
    /// tokens is maximally distant.
    fn field_distance(&self, terms: &[String], field: &FieldText) -> f64 {
        if field.tokens.is_empty() {
            return 1.0;
        }

        let total: f64 = terms
            .iter()
            .map(|term| {
                field
                    .tokens
                    .iter()
                    .map(|token| self.matcher.distance(term, token))
                    .fold(self.matcher.distance(term, &field.joined), f64::min)
            })
            .sum();

        total / terms.len() as f64
    }
}

impl std::fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndex")
            .field("posts", &self.entries.len())
            .field("fields", &FIELD_NAMES)
            .field("config", &self.config)
            .finish()
    }
}

/// Lowercase and split a field value into cleaned tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(clean_token)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Trim punctuation from both ends of a token. Hangul and other letters
/// count as alphanumeric, so Korean text passes through untouched.
fn clean_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric()).to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str, excerpt: &str, content: &str, tags: &[&str]) -> Arc<Post> {
        Arc::new(Post {
            slug: slug.into(),
            title: title.into(),
            excerpt: excerpt.into(),
            content: content.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        })
    }

    fn sample_corpus() -> Vec<Arc<Post>> {
        vec![
            post(
                "samsung-q3",
                "삼성전자 3분기 실적",
                "삼성전자가 시장 예상치를 웃도는 실적을 발표했다.",
                "반도체 부문 회복이 이익 개선을 이끌었다.",
                &["주식", "삼성전자"],
            ),
            post(
                "us-etf-guide",
                "미국 ETF 투자 가이드",
                "해외 ETF 계좌 개설부터 세금까지 정리.",
                "S&P500 추종 ETF를 중심으로 살펴본다.",
                &["ETF"],
            ),
            post(
                "dividend-basics",
                "배당 투자 기초",
                "배당주의 기본 개념.",
                "배당수익률과 배당성향을 설명한다.",
                &["배당", "주식"],
            ),
        ]
    }

    #[test]
    fn test_empty_query_short_circuits() {
        let index = SearchIndex::build(&sample_corpus());
        assert!(index.search("").is_empty());
        assert!(index.search("   ").is_empty());
    }

    #[test]
    fn test_empty_corpus_yields_no_results() {
        let index = SearchIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.search("삼성전자").is_empty());
    }

    #[test]
    fn test_exact_title_match_scores_zero() {
        let corpus = sample_corpus();
        let index = SearchIndex::build(&corpus);
        for p in &corpus {
            let hits = index.search(&p.title);
            assert!(
                hits.iter().any(|h| h.post.slug == p.slug),
                "exact title query must include '{}'",
                p.slug
            );
        }
        let hits = index.search("미국 ETF 투자 가이드");
        assert_eq!(hits[0].post.slug, "us-etf-guide");
        assert_eq!(hits[0].score, 0.0);
    }

    #[test]
    fn test_tag_match() {
        let index = SearchIndex::build(&sample_corpus());
        let hits = index.search("배당");
        assert!(hits.iter().any(|h| h.post.slug == "dividend-basics"));
    }

    #[test]
    fn test_results_sorted_ascending_and_unique() {
        let index = SearchIndex::build(&sample_corpus());
        // "투자" appears in two different titles.
        let hits = index.search("투자");
        assert_eq!(hits.len(), 2);

        for pair in hits.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }

        let mut slugs: Vec<_> = hits.iter().map(|h| h.post.slug.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), hits.len(), "no duplicate post identities");
    }

    #[test]
    fn test_below_threshold_rejected() {
        let index = SearchIndex::build(&sample_corpus());
        assert!(index.search("존재하지않는검색어just-noise-xyz").is_empty());
    }

    #[test]
    fn test_short_terms_never_match() {
        let corpus = vec![post("a", "X 리포트", "", "", &[])];
        let index = SearchIndex::build(&corpus);
        // Single-character term is dropped by the length floor.
        assert!(index.search("x").is_empty());
        // The surviving long term still matches.
        assert!(!index.search("x 리포트").is_empty());
    }

    #[test]
    fn test_weighted_minimum_prefers_title_field() {
        // Same fuzzy token in post A's title and post B's body: equal
        // textual similarity must rank A first.
        let corpus = vec![
            post("body-hit", "전혀 다른 제목", "", "가이드북 소개", &[]),
            post("title-hit", "가이드북 모음", "", "전혀 다른 본문", &[]),
        ];
        let index = SearchIndex::build(&corpus);
        let hits = index.search("가이드");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].post.slug, "title-hit");
        assert!(hits[0].score < hits[1].score);
    }

    #[test]
    fn test_exact_title_outranks_exact_body_at_zero() {
        // Both posts contain the literal term, so both score 0.0. The post
        // matching in the title must still come first even though the
        // body-match post precedes it in corpus order.
        let corpus = vec![
            post("body-exact", "전혀 다른 제목", "", "연금저축 세액공제 정리", &[]),
            post("title-exact", "연금저축 비교", "", "전혀 다른 본문", &[]),
        ];
        let index = SearchIndex::build(&corpus);
        let hits = index.search("연금저축");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].score, 0.0);
        assert_eq!(hits[1].score, 0.0);
        assert_eq!(hits[0].post.slug, "title-exact");
        assert_eq!(hits[1].post.slug, "body-exact");
    }

    #[test]
    fn test_all_short_token_title_reachable_by_its_own_title() {
        // Every token of "금 은" is under the per-term length floor; the
        // query must still find the post via whole-phrase matching.
        let corpus = vec![post("gold-silver", "금 은", "", "", &[])];
        let index = SearchIndex::build(&corpus);

        let hits = index.search("금 은");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].post.slug, "gold-silver");
        assert_eq!(hits[0].score, 0.0);

        // A bare single character still falls under the floor.
        assert!(index.search("금").is_empty());
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let corpus = vec![
            post("first", "월간 리포트", "", "", &[]),
            post("second", "월간 리포트", "", "", &[]),
        ];
        let index = SearchIndex::build(&corpus);
        let hits = index.search("월간 리포트");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].score, hits[1].score);
        assert_eq!(hits[0].post.slug, "first");
        assert_eq!(hits[1].post.slug, "second");
    }

    #[test]
    fn test_update_index_replaces_corpus() {
        let mut index = SearchIndex::build(&sample_corpus());
        assert!(!index.search("삼성전자").is_empty());

        let replacement = vec![post("isa", "ISA 계좌 활용법", "", "", &["절세"])];
        index.update_index(&replacement);

        assert_eq!(index.len(), 1);
        assert!(index.search("삼성전자").is_empty(), "old corpus fully discarded");
        assert!(!index.search("isa 계좌").is_empty());
    }

    #[test]
    fn test_missing_fields_contribute_no_score() {
        let corpus = vec![post("bare", "제목만 있음", "", "", &[])];
        let index = SearchIndex::build(&corpus);
        let hits = index.search("제목만");
        assert_eq!(hits.len(), 1);
        // Only the title field can have matched.
        let expected = 0.0;
        assert_eq!(hits[0].score, expected);
    }

    #[test]
    fn test_search_is_pure() {
        let index = SearchIndex::build(&sample_corpus());
        let first = index.search("etf");
        let second = index.search("etf");
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.post.slug, b.post.slug);
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn test_markdown_stripped_from_body_tokens() {
        let corpus = vec![post(
            "md",
            "제목",
            "",
            "**연금저축** 계좌의 [장점](https://example.com)",
            &[],
        )];
        let index = SearchIndex::build(&corpus);
        assert!(!index.search("연금저축").is_empty());
        // The link URL is not part of the plain text.
        assert!(index.search("example.com").is_empty());
    }
}
