// Unit tests for Profession Match

use profession_match::core::{fuzzy_match, split_keywords, ProfessionMatcher, Taxonomy};

fn english_taxonomy() -> Taxonomy {
    Taxonomy::from_pairs(vec![
        (
            "News & Communication category",
            vec!["Journalism", "Communication Studies", "Broadcasting", "Advertising"],
        ),
        ("Computer category", vec!["Computer Science & Technology", "Software Engineering"]),
        ("Chinese Language & Literature", vec!["Chinese Language", "Classical Philology"]),
    ])
    .unwrap()
}

#[test]
fn test_blank_query_matches_any_requirement() {
    let taxonomy = Taxonomy::default();
    for requirement in ["", "Any", "新闻传播学类", "   "] {
        assert!(fuzzy_match(requirement, "", &taxonomy));
        assert!(fuzzy_match(requirement, "   ", &taxonomy));
    }
}

#[test]
fn test_empty_requirement_matches_no_query() {
    let taxonomy = Taxonomy::default();
    for query in ["Something", "新闻学", ";;", "计算机, 法学"] {
        assert!(!fuzzy_match("", query, &taxonomy));
    }
}

#[test]
fn test_case_insensitive() {
    assert!(fuzzy_match("Computer Science", "computer", &Taxonomy::default()));
    assert!(fuzzy_match("computer science", "COMPUTER", &Taxonomy::default()));
}

#[test]
fn test_direction_a_requirement_contains_keyword() {
    assert!(fuzzy_match("新闻传播学类、历史学", "新闻", &Taxonomy::default()));
    assert!(fuzzy_match(
        "News & Communication category, History",
        "News",
        &english_taxonomy()
    ));
}

#[test]
fn test_direction_b_major_implies_category() {
    assert!(fuzzy_match("新闻传播学类", "新闻学", &Taxonomy::default()));
    assert!(fuzzy_match(
        "News & Communication category",
        "Journalism",
        &english_taxonomy()
    ));
}

#[test]
fn test_unrelated_profession_does_not_match() {
    assert!(!fuzzy_match("计算机类", "新闻学", &Taxonomy::default()));
    assert!(!fuzzy_match("Computer category", "Journalism", &english_taxonomy()));
}

#[test]
fn test_multi_keyword_or() {
    assert!(fuzzy_match("计算机科学与技术", "英语;计算机", &Taxonomy::default()));
    assert!(fuzzy_match(
        "Computer Science & Technology",
        "English;Computer",
        &english_taxonomy()
    ));
}

#[test]
fn test_multi_category_requirement() {
    assert!(fuzzy_match("汉语言文学，新闻传播学类，哲学", "新闻学", &Taxonomy::default()));
    assert!(fuzzy_match(
        "Chinese Language & Literature, News & Communication category, Philosophy",
        "Journalism",
        &english_taxonomy()
    ));
}

#[test]
fn test_only_delimiters_query_does_not_match() {
    // Not blank, so the "match all" rule does not apply; no keywords remain
    assert_eq!(split_keywords(";;"), Vec::<&str>::new());
    assert!(!fuzzy_match("新闻传播学类", ";;", &Taxonomy::default()));
}

#[test]
fn test_category_bridge_requires_exact_major() {
    // "软件" is only part of the major "软件工程", so it cannot bridge to 计算机类
    assert!(!fuzzy_match("计算机类", "软件", &Taxonomy::default()));
    assert!(fuzzy_match("计算机类", "软件工程", &Taxonomy::default()));
}

#[test]
fn test_direction_b_case_folds_major() {
    assert!(fuzzy_match(
        "News & Communication category",
        "JOURNALISM",
        &english_taxonomy()
    ));
}

#[test]
fn test_custom_taxonomy_replaces_default() {
    // The built-in table does not know English majors
    assert!(!fuzzy_match("News & Communication category", "Journalism", &Taxonomy::default()));
    // And an English table does not know the built-in majors
    assert!(!fuzzy_match("新闻传播学类", "新闻学", &english_taxonomy()));
}

#[test]
fn test_major_listed_under_several_categories() {
    let taxonomy = Taxonomy::from_pairs(vec![
        ("Economics category", vec!["Economics and Finance"]),
        ("Finance category", vec!["Economics and Finance"]),
    ])
    .unwrap();

    assert!(fuzzy_match("Finance category", "Economics and Finance", &taxonomy));
    assert!(fuzzy_match("Economics category", "Economics and Finance", &taxonomy));
}

#[test]
fn test_idempotent() {
    let matcher = ProfessionMatcher::with_default_taxonomy();
    let first = matcher.matches("汉语言文学，新闻传播学类", "新闻学、法学");
    for _ in 0..10 {
        assert_eq!(matcher.matches("汉语言文学，新闻传播学类", "新闻学、法学"), first);
    }
    assert_eq!(matcher.taxonomy(), &Taxonomy::default());
}
