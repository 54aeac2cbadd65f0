//! ヒューリスティクスが参照する固定語彙とルール表。
//!
//! 判定順・タイブレークを監査可能にするため、条件分岐に散らさず
//! 順序付きの静的データとして一箇所に置く。全て小文字で保持し、
//! 照合側がテキストを小文字化してから突き合わせる。

/// 履歴書側のスキル抽出語彙
pub const RESUME_SKILLS: &[&str] = &[
    "python",
    "java",
    "sql",
    "html",
    "css",
    "data analysis",
    "machine learning",
    "deep learning",
    "nlp",
    "c++",
    "javascript",
    "docker",
    "aws",
    "git",
    "linux",
    "communication",
    "teamwork",
    "leadership",
    "adaptability",
    "critical thinking",
    "problem solving",
];

/// 求人票側のスキル抽出語彙
pub const JD_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c",
    "go",
    "rust",
    "ruby",
    "scala",
    "kotlin",
    "r",
    "react",
    "angular",
    "vue",
    "next.js",
    "node.js",
    "flask",
    "django",
    "express",
    "spring boot",
    "fastapi",
    "machine learning",
    "deep learning",
    "nlp",
    "computer vision",
    "data analysis",
    "data visualization",
    "scikit-learn",
    "pandas",
    "numpy",
    "matplotlib",
    "seaborn",
    "tensorflow",
    "keras",
    "pytorch",
    "huggingface",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "firebase",
    "cassandra",
    "oracle",
    "sqlite",
    "snowflake",
    "aws",
    "azure",
    "gcp",
    "heroku",
    "digitalocean",
    "lambda",
    "s3",
    "ec2",
    "docker",
    "kubernetes",
    "jenkins",
    "gitlab",
    "github actions",
    "ansible",
    "terraform",
    "helm",
    "pytest",
    "unittest",
    "selenium",
    "cypress",
    "postman",
    "jmeter",
    "git",
    "github",
    "bitbucket",
    "jira",
    "confluence",
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "adaptability",
    "critical thinking",
    "excel",
    "power bi",
    "tableau",
    "airflow",
    "hadoop",
    "spark",
    "kafka",
    "elasticsearch",
    "graphql",
    "rest api",
];

/// カルチャーフィット判定用のソフトスキル語彙
pub const SOFT_SKILLS: &[&str] = &[
    "adaptability",
    "collaboration",
    "communication",
    "creativity",
    "critical thinking",
    "decision making",
    "emotional intelligence",
    "empathy",
    "leadership",
    "negotiation",
    "organization",
    "problem solving",
    "teamwork",
    "time management",
    "work ethic",
    "flexibility",
    "conflict resolution",
    "accountability",
    "active listening",
    "attention to detail",
    "cooperation",
    "dependability",
    "discipline",
    "initiative",
    "interpersonal skills",
    "resilience",
    "resourcefulness",
    "self-awareness",
    "stress management",
    "verbal communication",
    "written communication",
    "positivity",
    "motivation",
    "curiosity",
    "open-mindedness",
    "self-confidence",
    "constructive criticism",
    "risk management",
    "strategic thinking",
    "customer service",
    "delegation",
    "project management",
    "goal setting",
    "business etiquette",
    "persuasiveness",
    "tactfulness",
    "inclusivity",
    "diversity awareness",
    "presentation skills",
    "cultural intelligence",
    "mentoring",
    "coaching",
    "assertiveness",
    "patience",
    "public speaking",
    "influence",
    "clarity",
    "sense of humor",
    "mindfulness",
    "self-discipline",
    "proactive mindset",
    "team building",
    "diplomacy",
    "analytical mindset",
    "prioritization",
    "design thinking",
    "multitasking",
    "perspective taking",
    "learning agility",
    "self-motivation",
    "body language awareness",
    "growth mindset",
    "feedback reception",
    "task ownership",
    "inspirational speaking",
    "information sharing",
    "storytelling",
    "professionalism",
    "change management",
    "value alignment",
    "process orientation",
    "initiative at work",
    "rapport building",
    "barrier handling",
    "self-reflection",
    "credibility",
    "relationship nurturing",
    "ethical communication",
    "honesty",
    "reliability",
    "followership",
    "respectfulness",
    "personal development",
    "eagerness to learn",
    "consensus building",
    "humility",
    "networking",
    "helpfulness",
    "meeting deadlines",
    "clarifying expectations",
];

/// リーダーシップ言及の検出語彙
pub const LEADERSHIP_TERMS: &[&str] = &[
    "lead",
    "managed",
    "mentored",
    "supervised",
    "headed",
    "led team",
    "project lead",
];

/// キャリア遷移ナラティブ用の段階語彙（この順で出力される）
pub const CAREER_KEYWORDS: &[&str] = &[
    "intern",
    "trainee",
    "developer",
    "engineer",
    "software engineer",
    "senior developer",
    "team lead",
    "manager",
    "architect",
    "cto",
    "data analyst",
    "data scientist",
    "qa engineer",
    "web developer",
    "android developer",
    "ios developer",
    "sde",
    "ml engineer",
    "ai engineer",
    "research intern",
    "project manager",
    "campus ambassador",
    "club lead",
    "researcher",
    "lab assistant",
    "teaching assistant",
    "hackathon",
    "ideathon",
    "trainingship",
    "virtual internship",
    "bootcamp",
    "summer internship",
    "industrial training",
    "certification",
    "course completion",
    "open source contributor",
    "github contributor",
    "freelancer",
    "mentor",
    "volunteer",
    "project lead",
    "innovation head",
    "capstone project",
    "startup cofounder",
];

/// キャリア遷移が検出できなかったときの定型文
pub const CAREER_NOT_FOUND: &str = "Career progression not found.";

/// キャリアパス整合度のはしご（intern → ceo の15段階）
pub const JOB_LEVELS: &[&str] = &[
    "intern",
    "junior",
    "associate",
    "engineer",
    "developer",
    "senior",
    "lead",
    "manager",
    "architect",
    "director",
    "head",
    "vp",
    "chief",
    "cto",
    "ceo",
];

/// 資格・受賞セクションの見出し語
pub const CERTIFICATION_HEADERS: &[&str] = &[
    "certification",
    "certifications",
    "certifications & achievements",
    "achievements",
    "awards and certifications",
    "licenses",
    "honors",
];

/// 学歴行のグルーピング開始を示す語
pub const EDUCATION_GROUP_KEYWORDS: &[&str] = &[
    "school",
    "college",
    "university",
    "institute",
    "b.tech",
    "bachelor",
    "icse",
    "isc",
    "cbse",
    "engineering",
];

/// スキル補強提案のルール。
/// カテゴリの語がスキル集合に1つも無いときだけメッセージを出す。
pub struct SkillRecommendation {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
    pub message: &'static str,
}

pub const SKILL_RECOMMENDATIONS: &[SkillRecommendation] = &[
    SkillRecommendation {
        category: "cloud",
        keywords: &["aws", "gcp", "azure", "cloud"],
        message: "Consider learning cloud technologies (AWS, GCP, Azure, etc.)",
    },
    SkillRecommendation {
        category: "version_control",
        keywords: &["git", "github", "bitbucket"],
        message: "Include version control tools like Git in your profile.",
    },
    SkillRecommendation {
        category: "containerization",
        keywords: &["docker", "kubernetes"],
        message: "Familiarity with containerization tools (Docker, Kubernetes) is a valuable asset.",
    },
    SkillRecommendation {
        category: "testing",
        keywords: &["pytest", "unittest", "selenium", "junit"],
        message: "Include experience with testing frameworks for better code quality.",
    },
    SkillRecommendation {
        category: "soft_skills",
        keywords: &["communication", "teamwork", "leadership"],
        message: "Highlight soft skills like teamwork and communication.",
    },
];

/// 全カテゴリ充足時の定型文
pub const WELL_ROUNDED_MESSAGE: &str = "Well-rounded profile!";

/// ハードスキル語彙（tech_fit タグ判定用）
pub const HARD_SKILLS: &[&str] = &[
    "python",
    "java",
    "node.js",
    "docker",
    "aws",
    "gcp",
    "sql",
    "mongodb",
    "pytorch",
    "react",
    "spring boot",
    "typescript",
    "fastapi",
    "flask",
    "tensorflow",
    "azure",
    "kubernetes",
    "ci/cd",
    "spark",
    "graphql",
    "airflow",
];

/// コアソフトスキル（culture_fit タグ判定用）
pub const CORE_SOFT_SKILLS: &[&str] = &[
    "teamwork",
    "communication",
    "leadership",
    "adaptability",
    "critical thinking",
    "problem solving",
];

/// 面接準備度の学習提案で特に重視するキーワード
pub const CRITICAL_KEYWORDS: &[&str] = &[
    "aws",
    "gcp",
    "kubernetes",
    "ci/cd",
    "graphql",
    "communication",
    "leadership",
];

/// クラウドギャップ判定のキーワードペア
pub const CLOUD_KEYWORD_PAIR: (&str, &str) = ("aws", "gcp");

/// 不足クリティカルスキル → 推奨講座（この順で提案される）
pub const LEARNING_COURSES: &[(&str, &str)] = &[
    ("aws", "AWS Essentials (LinkedIn Learning)"),
    ("gcp", "Google Cloud Fundamentals (Coursera)"),
    ("kubernetes", "Kubernetes for Developers (Udemy)"),
    ("ci/cd", "CI/CD with GitHub Actions (Coursera)"),
    ("graphql", "Fullstack GraphQL (FreeCodeCamp)"),
    ("communication", "Effective Communication Skills (LinkedIn)"),
    ("leadership", "Leadership Principles (HarvardX)"),
];

/// カテゴリ集計用の語彙
pub const TECHNICAL_CATEGORY: &[&str] = &[
    "python",
    "java",
    "sql",
    "html",
    "css",
    "docker",
    "aws",
    "git",
    "linux",
    "javascript",
    "machine learning",
    "deep learning",
    "nlp",
];

pub const SOFT_CATEGORY: &[&str] = &[
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "adaptability",
    "creativity",
    "critical thinking",
    "time management",
];

pub const EDUCATION_CATEGORY: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "degree",
    "university",
    "college",
    "school",
    "academy",
    "certificate",
    "certification",
];

pub const PROJECT_CATEGORY: &[&str] = &[
    "project",
    "capstone",
    "prototype",
    "application",
    "game",
    "system",
    "website",
    "software",
    "platform",
];

pub const ACHIEVEMENT_CATEGORY: &[&str] = &[
    "award",
    "winner",
    "honor",
    "recognition",
    "published",
    "patent",
    "certificate",
    "certification",
];

pub const EXPERIENCE_CATEGORY: &[&str] = &[
    "internship",
    "job",
    "work",
    "experience",
    "role",
    "position",
    "employment",
    "consultant",
    "freelance",
];

/// スキル深度推定の対象領域
pub struct SkillDepthArea {
    pub area: &'static str,
    pub keywords: &'static [&'static str],
}

pub const SKILL_DEPTH_AREAS: &[SkillDepthArea] = &[
    SkillDepthArea {
        area: "python",
        keywords: &["python", "pandas", "numpy", "scikit-learn"],
    },
    SkillDepthArea {
        area: "java",
        keywords: &["java", "spring", "spring boot"],
    },
    SkillDepthArea {
        area: "web development",
        keywords: &[
            "html", "css", "javascript", "react", "angular", "vue", "node.js", "flask", "django",
        ],
    },
    SkillDepthArea {
        area: "data science",
        keywords: &[
            "machine learning",
            "deep learning",
            "nlp",
            "data analysis",
            "tensorflow",
            "pytorch",
        ],
    },
    SkillDepthArea {
        area: "cloud",
        keywords: &["aws", "azure", "gcp"],
    },
    SkillDepthArea {
        area: "devops",
        keywords: &["docker", "kubernetes", "jenkins", "terraform"],
    },
];

/// 深度の根拠となる言い回し（正規表現断片）
pub const DEPTH_INDICATOR_PATTERNS: &[&str] = &[
    r"expert in",
    r"proficient in",
    r"hands[- ]on",
    r"strong background",
    r"deep understanding",
    r"3\+ years",
    r"4\+ years",
    r"5\+ years",
    r"\bexperienced\b",
    r"led projects",
    r"architected",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learning_courses_cover_every_critical_keyword() {
        for keyword in CRITICAL_KEYWORDS {
            assert!(
                LEARNING_COURSES.iter().any(|(kw, _)| kw == keyword),
                "no course mapped for critical keyword {keyword}"
            );
        }
    }

    #[test]
    fn vocabularies_are_lowercase() {
        for list in [
            RESUME_SKILLS,
            JD_SKILLS,
            SOFT_SKILLS,
            LEADERSHIP_TERMS,
            CAREER_KEYWORDS,
            JOB_LEVELS,
            HARD_SKILLS,
            CORE_SOFT_SKILLS,
            CRITICAL_KEYWORDS,
        ] {
            for term in list {
                assert_eq!(*term, term.to_lowercase(), "vocabulary term not lowercase");
            }
        }
    }

    #[test]
    fn career_keywords_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for keyword in CAREER_KEYWORDS {
            assert!(seen.insert(keyword), "duplicate career keyword {keyword}");
        }
    }
}
