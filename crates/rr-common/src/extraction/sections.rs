//! 行単位のセクション分割と、セクション由来の抽出ヒューリスティクス。

use std::collections::{BTreeSet, HashMap};

use lazy_static::lazy_static;
use regex::Regex;

use crate::vocab;

/// 履歴書の論理セクション。見出し語にマッチしない行は General に入る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    General,
    Education,
    Projects,
    Training,
    Activities,
}

lazy_static! {
    static ref EDUCATION_HEADER_RE: Regex = Regex::new(
        r"(?i)education|educational background|academic profile|academics|scholastic|education & certifications"
    )
    .unwrap();
    static ref PROJECT_HEADER_RE: Regex = Regex::new(r"(?i)project").unwrap();
    static ref TRAINING_HEADER_RE: Regex = Regex::new(r"(?i)training|certification").unwrap();
    static ref ACTIVITY_HEADER_RE: Regex =
        Regex::new(r"(?i)extra[- ]?curricular|activities").unwrap();
    // 学歴の区切りになる西暦レンジ: "2012-2016" / "2012–2016"
    static ref YEAR_RANGE_RE: Regex = Regex::new(r"\d{4}[-–]\d{4}").unwrap();
    // "Projects:" のような新セクション見出し（資格収集の打ち切りに使う）
    static ref SECTION_BREAK_RE: Regex = Regex::new(r"^[A-Z][a-z]+:").unwrap();
}

/// 行を走査し、見出し語で現在セクションを切り替えながらバケツ詰めする。
///
/// 見出し行自体も新しいセクションのバケツに入る。空行は捨てる。
pub fn split_sections(text: &str) -> HashMap<Section, Vec<String>> {
    let mut sections: HashMap<Section, Vec<String>> = HashMap::new();
    sections.insert(Section::General, Vec::new());
    let mut current = Section::General;

    for line in text.lines() {
        let line_clean = line.trim();

        if EDUCATION_HEADER_RE.is_match(line_clean) {
            current = Section::Education;
        } else if PROJECT_HEADER_RE.is_match(line_clean) {
            current = Section::Projects;
        } else if TRAINING_HEADER_RE.is_match(line_clean) {
            current = Section::Training;
        } else if ACTIVITY_HEADER_RE.is_match(line_clean) {
            current = Section::Activities;
        }

        if !line_clean.is_empty() {
            sections
                .entry(current)
                .or_default()
                .push(line_clean.to_string());
        }
    }

    sections
}

/// 学歴行を機関単位のレコードにまとめる。
///
/// 機関・学位キーワードか西暦レンジが現れたら新しいレコードを開始し、
/// 1レコード内の行は " | " で連結する。
pub fn group_education_lines(lines: &[String]) -> Vec<String> {
    let mut grouped = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let lowered = line.to_lowercase();
        let starts_record = vocab::EDUCATION_GROUP_KEYWORDS
            .iter()
            .any(|kw| lowered.contains(kw))
            || YEAR_RANGE_RE.is_match(line);

        if starts_record && !current.is_empty() {
            grouped.push(current.join(" | "));
            current.clear();
        }
        current.push(line.to_string());
    }

    if !current.is_empty() {
        grouped.push(current.join(" | "));
    }

    grouped
}

/// 資格・受賞セクションの記載を集める。
///
/// 見出し語を含む行からセクション開始とみなし、空行か次のセクション
/// 見出し（"Xxxx:" 形式）で打ち切る。3文字以下の行はノイズとして捨てる。
pub fn extract_certifications(text: &str) -> BTreeSet<String> {
    let mut started = false;
    let mut collected: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();

        if vocab::CERTIFICATION_HEADERS
            .iter()
            .any(|header| lowered.contains(header))
        {
            started = true;
            continue;
        }

        if started {
            if trimmed.is_empty() || SECTION_BREAK_RE.is_match(trimmed) {
                break;
            }
            collected.push(trimmed);
        }
    }

    collected
        .into_iter()
        .filter(|line| line.len() > 3)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_default_to_general_section() {
        let sections = split_sections("John Doe\nBackend developer");
        assert_eq!(sections[&Section::General].len(), 2);
    }

    #[test]
    fn header_switches_current_section() {
        let text = "Summary line\nEducation\nExample University\nProjects\nCompiler in Rust";
        let sections = split_sections(text);

        assert_eq!(sections[&Section::General], vec!["Summary line"]);
        assert_eq!(
            sections[&Section::Education],
            vec!["Education", "Example University"]
        );
        assert_eq!(
            sections[&Section::Projects],
            vec!["Projects", "Compiler in Rust"]
        );
    }

    #[test]
    fn blank_lines_are_dropped() {
        let sections = split_sections("Education\n\n\nExample College");
        assert_eq!(
            sections[&Section::Education],
            vec!["Education", "Example College"]
        );
    }

    #[test]
    fn education_lines_group_by_institution() {
        let lines: Vec<String> = vec![
            "Example University".into(),
            "Graduated with distinction".into(),
            "City College".into(),
            "Senior secondary coursework".into(),
        ];
        let grouped = group_education_lines(&lines);
        assert_eq!(
            grouped,
            vec![
                "Example University | Graduated with distinction",
                "City College | Senior secondary coursework",
            ]
        );
    }

    #[test]
    fn year_range_starts_a_new_record() {
        let lines: Vec<String> = vec![
            "Example Institute".into(),
            "2012-2016".into(),
            "Details line".into(),
        ];
        let grouped = group_education_lines(&lines);
        assert_eq!(grouped, vec!["Example Institute", "2012-2016 | Details line"]);
    }

    #[test]
    fn certifications_collect_until_blank_line() {
        let text = "Certifications & Achievements\nAWS Certified Developer\nHackathon winner 2023\n\nProjects\nignored";
        let certs = extract_certifications(text);
        assert!(certs.contains("AWS Certified Developer"));
        assert!(certs.contains("Hackathon winner 2023"));
        assert_eq!(certs.len(), 2);
    }

    #[test]
    fn certifications_stop_at_next_section_header() {
        let text = "Licenses\nDriving license A1\nSkills: python";
        let certs = extract_certifications(text);
        assert_eq!(certs.len(), 1);
        assert!(certs.contains("Driving license A1"));
    }

    #[test]
    fn short_certification_lines_are_dropped() {
        let text = "Honors\nABC\nDean's list award";
        let certs = extract_certifications(text);
        assert!(!certs.contains("ABC"));
        assert!(certs.contains("Dean's list award"));
    }

    #[test]
    fn no_certification_section_yields_empty_set() {
        assert!(extract_certifications("plain resume text").is_empty());
    }
}
