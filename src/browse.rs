//! 対話式の教員名簿検索
//!
//! 入力のたびに検索文字列か学科を更新し、その場で結果を再計算して表示する。

use crate::error::{Result, ShowcaseError};
use crate::render;
use college_showcase_common::{DepartmentFilter, FacultyDirectory, Teacher};
use dialoguer::Input;

/// 対話アクション
#[derive(Debug, PartialEq)]
pub enum BrowseAction {
    /// 検索文字列を置き換える
    Query(String),
    /// 学科を切り替える
    Department(DepartmentFilter),
    /// 結果のn番目（1始まり）の詳細
    Show(usize),
    /// 条件をすべて解除
    Reset,
    /// 終了
    Quit,
}

/// 入力行を解釈する
///
/// `:d <学科>` で学科切替、`:<番号>` で詳細、`:r` で解除、`:q` で終了。
/// それ以外は検索文字列としてそのまま使う（空白も保持）。
pub fn parse_browse_action(line: &str) -> Result<BrowseAction> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(BrowseAction::Query(line.to_string()));
    };

    let command = command.trim();
    match command {
        "q" | "quit" => Ok(BrowseAction::Quit),
        "r" | "reset" => Ok(BrowseAction::Reset),
        _ => {
            if let Some(dept) = command.strip_prefix("d ") {
                let filter: DepartmentFilter = dept.parse()?;
                return Ok(BrowseAction::Department(filter));
            }
            match command.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(BrowseAction::Show(n)),
                _ => Err(ShowcaseError::Prompt(format!("不明なコマンド: :{}", command))),
            }
        }
    }
}

/// 対話式で名簿を検索
pub fn run_interactive_browse(teachers: Vec<Teacher>, initial: DepartmentFilter) -> Result<()> {
    let mut directory = FacultyDirectory::new(teachers);
    directory.set_category(initial);

    println!("操作: [文字列]検索 [:d 学科]学科切替 [:番号]詳細 [:r]解除 [:q]終了");
    println!("学科: {}", chip_row(directory.category()));
    println!("---\n");
    print!("{}", render::faculty_list(&directory));

    loop {
        let line: String = Input::new()
            .with_prompt("検索")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ShowcaseError::Prompt(e.to_string()))?;

        let action = match parse_browse_action(&line) {
            Ok(action) => action,
            Err(e) => {
                println!("  ⚠ {}\n", e);
                continue;
            }
        };

        match action {
            BrowseAction::Query(q) => directory.set_query(&q),
            BrowseAction::Department(d) => {
                directory.set_category(d);
                println!("学科: {}", chip_row(d));
            }
            BrowseAction::Reset => directory.reset(),
            BrowseAction::Show(n) => {
                match directory.results().get(n - 1) {
                    Some(t) => println!("\n{}", render::teacher_detail(t)),
                    None => println!("  ⚠ {}番はありません（{}件）\n", n, directory.len()),
                }
                continue;
            }
            BrowseAction::Quit => break,
        }

        println!();
        print!("{}", render::faculty_list(&directory));
    }

    Ok(())
}

/// 学科チップの並び（選択中は [] で囲む）
pub fn chip_row(selected: DepartmentFilter) -> String {
    DepartmentFilter::ALL_CASES
        .iter()
        .map(|d| {
            if *d == selected {
                format!("[{}]", d.alias())
            } else {
                d.alias().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
