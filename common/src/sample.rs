//! 組み込みサンプルデータ
//!
//! 外部データが指定されない場合に使用する固定データ。

use crate::types::{ClassInfo, Department, MenuItem, Teacher};

impl Teacher {
    /// 教員名簿のサンプル
    pub fn mock_data() -> Vec<Teacher> {
        vec![
            teacher(1, "Dr. Ali Khan", "Computer Science", "Professor", "PhD Computer Science", 18, &["Algorithms", "Compiler Construction"]),
            teacher(2, "Sara Malik", "Physics", "Assistant Professor", "MPhil Physics", 7, &["Mechanics", "Electromagnetism"]),
            teacher(3, "Bilal Ahmed", "Mathematics", "Associate Professor", "PhD Applied Mathematics", 12, &["Calculus", "Linear Algebra"]),
            teacher(4, "Ayesha Siddiqui", "Computer Science", "Lecturer", "MS Software Engineering", 4, &["Web Engineering", "Databases"]),
            teacher(5, "Usman Tariq", "Chemistry", "Professor", "PhD Organic Chemistry", 21, &["Organic Chemistry"]),
            teacher(6, "Hina Raza", "English", "Lecturer", "MA English Literature", 6, &["Communication Skills", "Victorian Novel"]),
            teacher(7, "Kamran Shah", "Business Administration", "Assistant Professor", "MBA Finance", 9, &["Financial Accounting", "Marketing"]),
            teacher(8, "Fatima Noor", "Physics", "Professor", "PhD Quantum Optics", 16, &["Quantum Mechanics"]),
            teacher(9, "Zainab Hussain", "Mathematics", "Lecturer", "MS Statistics", 3, &["Probability", "Statistics"]),
            teacher(10, "Imran Qureshi", "Computer Science", "Associate Professor", "PhD Artificial Intelligence", 14, &["Machine Learning", "Operating Systems"]),
        ]
    }
}

impl Department {
    /// 学科一覧のサンプル
    pub fn sample_departments() -> Vec<Department> {
        vec![
            Department {
                id: "cs".into(),
                name: "Computer Science".into(),
                head: "Dr. Ali Khan".into(),
                description: "Software, systems and computing theory.".into(),
                classes: vec![
                    class("CS-101", "Programming Fundamentals", 1, 4, "Ayesha Siddiqui"),
                    class("CS-102", "Discrete Structures", 1, 3, "Dr. Ali Khan"),
                    class("CS-201", "Data Structures", 3, 4, "Imran Qureshi"),
                    class("CS-301", "Operating Systems", 5, 3, "Imran Qureshi"),
                    class("CS-302", "Database Systems", 5, 3, "Ayesha Siddiqui"),
                ],
            },
            Department {
                id: "phy".into(),
                name: "Physics".into(),
                head: "Fatima Noor".into(),
                description: "Classical and modern physics with laboratory work.".into(),
                classes: vec![
                    class("PHY-101", "Mechanics", 1, 3, "Sara Malik"),
                    class("PHY-201", "Electromagnetism", 3, 3, "Sara Malik"),
                    class("PHY-401", "Quantum Mechanics", 7, 3, "Fatima Noor"),
                ],
            },
            Department {
                id: "math".into(),
                name: "Mathematics".into(),
                head: "Bilal Ahmed".into(),
                description: "Pure and applied mathematics.".into(),
                classes: vec![
                    class("MTH-101", "Calculus I", 1, 3, "Bilal Ahmed"),
                    class("MTH-203", "Linear Algebra", 3, 3, "Bilal Ahmed"),
                    class("MTH-210", "Probability and Statistics", 4, 3, "Zainab Hussain"),
                ],
            },
            Department {
                id: "chem".into(),
                name: "Chemistry".into(),
                head: "Usman Tariq".into(),
                description: "Organic, inorganic and physical chemistry.".into(),
                classes: vec![
                    class("CHM-101", "General Chemistry", 1, 4, "Usman Tariq"),
                    class("CHM-301", "Organic Chemistry", 5, 3, "Usman Tariq"),
                ],
            },
            Department {
                id: "eng".into(),
                name: "English".into(),
                head: "Hina Raza".into(),
                description: "Language, literature and communication.".into(),
                classes: vec![
                    class("ENG-101", "Communication Skills", 1, 2, "Hina Raza"),
                    class("ENG-305", "Victorian Novel", 6, 3, "Hina Raza"),
                ],
            },
            Department {
                id: "bba".into(),
                name: "Business Administration".into(),
                head: "Kamran Shah".into(),
                description: "Management, finance and marketing.".into(),
                classes: vec![
                    class("BBA-110", "Financial Accounting", 2, 3, "Kamran Shah"),
                    class("BBA-220", "Principles of Marketing", 3, 3, "Kamran Shah"),
                ],
            },
        ]
    }
}

impl MenuItem {
    /// 食堂メニューのサンプル
    pub fn sample_menu() -> Vec<MenuItem> {
        vec![
            menu_item(1, "Chicken Biryani", "Rice", "Spiced basmati rice with chicken and raita.", 350, 4.7, 15),
            menu_item(2, "Zinger Burger", "Fast Food", "Crispy chicken fillet with lettuce and mayo.", 450, 4.5, 10),
            menu_item(3, "Club Sandwich", "Fast Food", "Triple-decker with chicken, egg and fries.", 380, 4.2, 8),
            menu_item(4, "Aloo Paratha", "Breakfast", "Stuffed flatbread served with yogurt.", 150, 4.4, 7),
            menu_item(5, "Chana Chaat", "Snacks", "Chickpeas with tamarind chutney.", 120, 4.1, 5),
            menu_item(6, "Chai", "Beverages", "Milk tea brewed with cardamom.", 60, 4.8, 3),
            menu_item(7, "Mango Shake", "Beverages", "Fresh mango blended with milk.", 200, 4.6, 4),
        ]
    }
}

fn teacher(
    id: u32,
    name: &str,
    department: &str,
    designation: &str,
    qualification: &str,
    experience_years: u32,
    subjects: &[&str],
) -> Teacher {
    let slug = name
        .trim_start_matches("Dr. ")
        .to_lowercase()
        .replace(' ', ".");
    Teacher {
        id,
        name: name.into(),
        department: department.into(),
        designation: designation.into(),
        qualification: qualification.into(),
        email: format!("{}@college.edu.pk", slug),
        phone: format!("+92-42-111-000-{:03}", id),
        experience_years,
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
    }
}

fn class(code: &str, title: &str, semester: u8, credit_hours: u8, instructor: &str) -> ClassInfo {
    ClassInfo {
        code: code.into(),
        title: title.into(),
        semester,
        credit_hours,
        instructor: instructor.into(),
    }
}

fn menu_item(
    id: u32,
    name: &str,
    section: &str,
    description: &str,
    price: u32,
    rating: f32,
    prep_minutes: u32,
) -> MenuItem {
    MenuItem {
        id,
        name: name.into(),
        section: section.into(),
        description: description.into(),
        price,
        rating,
        prep_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::DepartmentFilter;
    use crate::types::DepartmentStats;
    use std::collections::HashSet;

    #[test]
    fn test_mock_teacher_ids_unique() {
        let teachers = Teacher::mock_data();
        let ids: HashSet<_> = teachers.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), teachers.len());
    }

    #[test]
    fn test_every_teacher_department_is_selectable() {
        for t in Teacher::mock_data() {
            let parsed: DepartmentFilter = t.department.parse().expect("未知の学科");
            assert!(!parsed.is_all());
        }
    }

    #[test]
    fn test_department_count_matches_stats() {
        let stats = DepartmentStats::college_stats();
        assert_eq!(Department::sample_departments().len() as u32, stats.total_departments);
    }

    #[test]
    fn test_teacher_email_slug() {
        let ali = &Teacher::mock_data()[0];
        assert_eq!(ali.email, "ali.khan@college.edu.pk");
        assert_eq!(ali.phone, "+92-42-111-000-001");
    }

    #[test]
    fn test_menu_prices_positive() {
        assert!(MenuItem::sample_menu().iter().all(|m| m.price > 0));
    }
}
