//! コマンド結果の整形
//!
//! 画面の一覧表示に相当するテキストを組み立てる。出力先は呼び出し側。

use college_showcase_common::{
    format_price, ClassInfo, Department, DepartmentFilter, DepartmentStats, FacultyDirectory, MenuItem,
    Order, Teacher,
};

/// 一致なし表示
pub const NO_RESULTS: &str = "No results found";

/// 元データが空の場合の表示
pub const EMPTY_DIRECTORY: &str = "No faculty members listed";

/// 名簿の一覧
pub fn faculty_list(directory: &FacultyDirectory) -> String {
    let mut out = String::new();
    out.push_str(&filter_header(directory.query(), directory.category(), directory.len()));

    if directory.is_empty_result() {
        out.push_str(&format!("  {}\n", NO_RESULTS));
        return out;
    }
    if directory.is_empty() {
        out.push_str(&format!("  {}\n", EMPTY_DIRECTORY));
        return out;
    }

    for t in directory.results() {
        out.push_str(&format!("  {} - {} ({})\n", t.name, t.designation, t.department));
        if !t.email.is_empty() {
            out.push_str(&format!("      {}\n", t.email));
        }
    }
    out
}

/// 教員1件の詳細
pub fn teacher_detail(t: &Teacher) -> String {
    let mut out = format!("{}\n", t.name);
    out.push_str(&format!("  学科: {}\n", t.department));
    out.push_str(&format!("  職位: {}\n", t.designation));
    out.push_str(&format!("  学位: {}\n", t.qualification));
    out.push_str(&format!("  経験: {}年\n", t.experience_years));
    if !t.subjects.is_empty() {
        out.push_str(&format!("  担当: {}\n", t.subjects.join(", ")));
    }
    out.push_str(&format!("  連絡先: {} / {}\n", t.email, t.phone));
    out
}

fn filter_header(query: &str, category: DepartmentFilter, count: usize) -> String {
    let query_label = if query.is_empty() { "-".to_string() } else { format!("\"{}\"", query) };
    format!("学科: {} / 検索: {} / {}件\n", category.label(), query_label, count)
}

/// 学科一覧（空なら一致なし表示）
pub fn department_list(departments: &[Department]) -> String {
    if departments.is_empty() {
        return format!("  {}\n", NO_RESULTS);
    }

    departments
        .iter()
        .map(|d| {
            format!(
                "  [{}] {} - {}クラス / {}単位 (学科長: {})\n",
                d.id,
                d.name,
                d.classes.len(),
                d.total_credit_hours(),
                d.head
            )
        })
        .collect()
}

/// 学科詳細（クラス一覧）
pub fn department_detail(department: &Department, classes: &[&ClassInfo]) -> String {
    let mut out = format!("{} ({})\n", department.name, department.id);
    if !department.description.is_empty() {
        out.push_str(&format!("  {}\n", department.description));
    }
    out.push_str(&format!("  学科長: {}\n\n", department.head));

    if classes.is_empty() {
        out.push_str(&format!("  {}\n", NO_RESULTS));
        return out;
    }

    for c in classes {
        out.push_str(&format!(
            "  {:<8} {:<30} 第{}セメスター {}単位  {}\n",
            c.code, c.title, c.semester, c.credit_hours, c.instructor
        ));
    }
    out
}

/// 大学統計
pub fn stats(stats: &DepartmentStats, current_year: i32) -> String {
    let mut out = String::from("College Statistics\n");
    out.push_str(&format!("  学生数: {}\n", stats.total_students));
    out.push_str(&format!("  教員数: {}\n", stats.total_faculty));
    out.push_str(&format!("  学科数: {}\n", stats.total_departments));
    out.push_str(&format!(
        "  創立: {} ({}年)\n",
        stats.established_year,
        stats.years_active(current_year)
    ));
    out.push_str(&format!("  合格率: {:.1}%\n", stats.pass_rate));
    out.push_str(&format!("  教員1人あたり学生数: {:.1}\n", stats.student_faculty_ratio()));
    out
}

/// メニュー一覧
pub fn menu_list(menu: &[MenuItem], currency: &str) -> String {
    if menu.is_empty() {
        return format!("  {}\n", NO_RESULTS);
    }

    menu.iter()
        .map(|m| {
            format!(
                "  {:>2}) {:<18} {:<10} {:>10}  ★{:.1}\n",
                m.id,
                m.name,
                m.section,
                format_price(m.price as u64, currency),
                m.rating
            )
        })
        .collect()
}

/// 注文詳細
pub fn order_detail(order: &Order, currency: &str) -> String {
    let item = order.item();
    let mut out = format!("{} ({})\n", item.name, item.section);
    if !item.description.is_empty() {
        out.push_str(&format!("  {}\n", item.description));
    }
    out.push_str(&format!("  単価: {}\n", format_price(item.price as u64, currency)));
    out.push_str(&format!("  調理時間: 約{}分\n", item.prep_minutes));
    out.push_str(&format!("  数量: {}\n", order.quantity()));
    out.push_str(&format!("  合計: {}\n", format_price(order.total(), currency)));
    out
}
