use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Built-in category table, preserved verbatim from the posting sheets it
/// is matched against.
const DEFAULT_PROFESSION_MAP: &[(&str, &[&str])] = &[
    (
        "新闻传播学类",
        &["新闻学", "传播学", "广播电视学", "广告学", "编辑出版学", "网络与新媒体", "数字出版"],
    ),
    (
        "计算机类",
        &[
            "计算机科学与技术",
            "软件工程",
            "网络工程",
            "信息安全",
            "物联网工程",
            "数字媒体技术",
            "智能科学与技术",
            "空间信息与数字技术",
            "电子与计算机工程",
        ],
    ),
    (
        "中国语言文学类",
        &["汉语言文学", "汉语言", "汉语国际教育", "中国少数民族语言文学", "古典文献学"],
    ),
    ("法学类", &["法学", "知识产权", "监狱学"]),
    (
        "经济学类",
        &["经济学", "经济统计学", "国民经济管理", "资源与环境经济学", "商务经济学", "能源经济学"],
    ),
    ("财政学类", &["财政学", "税收学"]),
    (
        "金融学类",
        &["金融学", "金融工程", "保险学", "投资学", "金融数学", "信用管理", "经济与金融"],
    ),
    (
        "工商管理类",
        &[
            "工商管理",
            "市场营销",
            "会计学",
            "财务管理",
            "国际商务",
            "人力资源管理",
            "审计学",
            "资产评估",
            "物业管理",
            "文化产业管理",
        ],
    ),
    (
        "公共管理类",
        &["公共事业管理", "行政管理", "劳动与社会保障", "土地资源管理", "城市管理"],
    ),
    (
        "电子信息类",
        &[
            "电子信息工程",
            "电子科学与技术",
            "通信工程",
            "微电子科学与工程",
            "光电信息科学与工程",
            "信息工程",
        ],
    ),
];

/// Errors that can occur while building or loading a taxonomy
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Failed to read taxonomy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid taxonomy file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Category name must not be blank")]
    BlankCategory,
}

/// A broad major grouping and the specific majors it subsumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub majors: Vec<String>,
}

impl Category {
    /// Exact membership test against the listed majors
    pub fn contains_major(&self, major: &str) -> bool {
        self.majors.iter().any(|m| m == major)
    }
}

/// On-disk layout: an ordered array of `[[category]]` tables
#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    #[serde(default, rename = "category")]
    categories: Vec<Category>,
}

/// Immutable mapping from category name to its ordered member majors.
///
/// Category order is preserved from construction. There is no mutation API;
/// a different table is expressed by building a new `Taxonomy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    /// Build a taxonomy from categories, rejecting blank or repeated names
    pub fn new(categories: Vec<Category>) -> Result<Self, TaxonomyError> {
        let mut seen = HashSet::with_capacity(categories.len());
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(TaxonomyError::BlankCategory);
            }
            if !seen.insert(category.name.as_str()) {
                return Err(TaxonomyError::DuplicateCategory(category.name.clone()));
            }
        }

        Ok(Self { categories })
    }

    /// Build a taxonomy from `(category, majors)` pairs
    pub fn from_pairs<I, C, M>(pairs: I) -> Result<Self, TaxonomyError>
    where
        I: IntoIterator<Item = (C, Vec<M>)>,
        C: Into<String>,
        M: Into<String>,
    {
        let categories = pairs
            .into_iter()
            .map(|(name, majors)| Category {
                name: name.into(),
                majors: majors.into_iter().map(Into::into).collect(),
            })
            .collect();

        Self::new(categories)
    }

    /// The built-in ten-category table
    pub fn builtin() -> Self {
        Self {
            categories: DEFAULT_PROFESSION_MAP
                .iter()
                .map(|(name, majors)| Category {
                    name: (*name).to_string(),
                    majors: majors.iter().map(|m| (*m).to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Parse a taxonomy from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, TaxonomyError> {
        let file: TaxonomyFile = toml::from_str(source)?;
        Self::new(file.categories)
    }

    /// Load a taxonomy from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TaxonomyError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Iterate `(category, majors)` pairs in construction order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|c| (c.name.as_str(), c.majors.as_slice()))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Majors listed under a category, if it exists
    pub fn majors_of(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.majors.as_slice())
    }

    /// Whether `major` is listed verbatim under `category`
    pub fn category_contains(&self, category: &str, major: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.name == category && c.contains_major(major))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_ten_categories() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.len(), 10);

        for (_, majors) in taxonomy.iter() {
            assert!(majors.len() >= 2 && majors.len() <= 11);
        }
    }

    #[test]
    fn test_builtin_preserves_order() {
        let taxonomy = Taxonomy::builtin();
        let names: Vec<&str> = taxonomy.iter().map(|(name, _)| name).collect();
        assert_eq!(names.first(), Some(&"新闻传播学类"));
        assert_eq!(names.last(), Some(&"电子信息类"));
    }

    #[test]
    fn test_builtin_is_valid() {
        let taxonomy = Taxonomy::builtin();
        let rebuilt = Taxonomy::new(taxonomy.categories().to_vec()).unwrap();
        assert_eq!(rebuilt, taxonomy);
    }

    #[test]
    fn test_membership() {
        let taxonomy = Taxonomy::default();
        assert!(taxonomy.category_contains("新闻传播学类", "新闻学"));
        assert!(!taxonomy.category_contains("新闻传播学类", "新闻"));
        assert!(!taxonomy.category_contains("计算机类", "新闻学"));
        assert_eq!(taxonomy.majors_of("财政学类").map(|m| m.len()), Some(2));
        assert!(taxonomy.majors_of("哲学类").is_none());
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let result = Taxonomy::from_pairs(vec![("Law", vec!["Law"]), ("Law", vec!["IP Law"])]);
        assert!(matches!(result, Err(TaxonomyError::DuplicateCategory(name)) if name == "Law"));
    }

    #[test]
    fn test_rejects_blank_category() {
        let result = Taxonomy::from_pairs(vec![("  ", vec!["Law"])]);
        assert!(matches!(result, Err(TaxonomyError::BlankCategory)));
    }

    #[test]
    fn test_from_toml_str() {
        let source = r#"
            [[category]]
            name = "News & Communication"
            majors = ["Journalism", "Advertising"]

            [[category]]
            name = "Law"
            majors = ["Law"]
        "#;

        let taxonomy = Taxonomy::from_toml_str(source).unwrap();
        assert_eq!(taxonomy.len(), 2);
        assert!(taxonomy.category_contains("News & Communication", "Journalism"));
    }

    #[test]
    fn test_from_toml_str_invalid() {
        assert!(matches!(
            Taxonomy::from_toml_str("[[category]]\nmajors = 3"),
            Err(TaxonomyError::Parse(_))
        ));
    }
}
