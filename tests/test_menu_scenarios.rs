use menu_render::{convert_menu, MenuConfig, MenuError, RowPolicy};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE_MENU: &str =
    "Breakfast,Dairy,7am,Yogurt\nBreakfast,Fruit,7am,Banana\nLunch,Meat,12pm,Sandwich";

fn config_in(dir: &Path) -> MenuConfig {
    MenuConfig {
        input: dir.join("menu.csv"),
        html_output: dir.join("menu.html"),
        text_output: dir.join("menu.txt"),
        ..MenuConfig::default()
    }
}

fn write_menu(dir: &TempDir, contents: &str) -> MenuConfig {
    let config = config_in(dir.path());
    fs::write(&config.input, contents).unwrap();
    config
}

#[tokio::test]
async fn test_html_tables_per_meal_type() {
    let dir = TempDir::new().unwrap();
    let config = write_menu(&dir, SAMPLE_MENU);

    let report = convert_menu(&config).await.unwrap();
    assert_eq!(report.group_count, 2);
    assert_eq!(report.row_count, 3);

    let html = fs::read_to_string(&config.html_output).unwrap();
    let tables: Vec<&str> = html.split("</table>").filter(|t| t.contains("<table")).collect();
    assert_eq!(tables.len(), 2);

    assert!(tables[0].contains("Breakfast Items"));
    assert_eq!(tables[0].matches("<td>").count(), 2);
    assert!(tables[1].contains("Lunch Items"));
    assert_eq!(tables[1].matches("<td>").count(), 1);

    let first_cell = html.find("<td>").unwrap();
    assert!(html[first_cell..].starts_with("<td>Yogurt, Dairy, 7am</td>"));
}

#[tokio::test]
async fn test_text_sections_in_input_order() {
    let dir = TempDir::new().unwrap();
    let config = write_menu(&dir, SAMPLE_MENU);

    convert_menu(&config).await.unwrap();

    let text = fs::read_to_string(&config.text_output).unwrap();
    let breakfast = text.find("* Breakfast Items *").unwrap();
    let lunch = text.find("* Lunch Items *").unwrap();
    assert!(breakfast < lunch);
    assert!(text.lines().any(|line| line == "Sandwich, Meat, 12pm"));
}

#[tokio::test]
async fn test_empty_input_produces_no_groups() {
    let dir = TempDir::new().unwrap();
    let config = write_menu(&dir, "");

    let report = convert_menu(&config).await.unwrap();
    assert_eq!(report.group_count, 0);

    let html = fs::read_to_string(&config.html_output).unwrap();
    let text = fs::read_to_string(&config.text_output).unwrap();
    assert_eq!(html.matches("<table").count(), 0);
    assert_eq!(text.matches("Items *").count(), 0);
}

#[tokio::test]
async fn test_trailing_newline_is_not_a_group() {
    let dir = TempDir::new().unwrap();
    let config = write_menu(&dir, &format!("{}\n", SAMPLE_MENU));

    let report = convert_menu(&config).await.unwrap();
    assert_eq!(report.group_count, 2);

    let text = fs::read_to_string(&config.text_output).unwrap();
    assert!(!text.contains("*  Items *"));
}

#[tokio::test]
async fn test_short_row_skipped_by_default() {
    let dir = TempDir::new().unwrap();
    let config = write_menu(
        &dir,
        "Lunch,Meat,12pm,Sandwich\nLunch,Meat,12pm\nDinner,Fish,7pm,Salmon",
    );

    let report = convert_menu(&config).await.unwrap();
    assert_eq!(report.skipped_rows, vec![2]);
    assert_eq!(report.row_count, 2);

    let html = fs::read_to_string(&config.html_output).unwrap();
    assert_eq!(html.matches("<td>").count(), 2);
}

#[tokio::test]
async fn test_short_row_rejected_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut config = write_menu(&dir, "Lunch,Meat,12pm,Sandwich\nLunch,Meat,12pm");
    config.row_policy = RowPolicy::Reject;

    let result = convert_menu(&config).await;
    match result {
        Err(MenuError::MalformedRow { line_number, .. }) => assert_eq!(line_number, 2),
        other => panic!("Expected MalformedRow, got {:?}", other),
    }
    assert!(!config.html_output.exists());
    assert!(!config.text_output.exists());
}

#[tokio::test]
async fn test_missing_input_leaves_outputs_untouched() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.html_output, "previous html").unwrap();

    let result = convert_menu(&config).await;
    assert!(matches!(result, Err(MenuError::Read { .. })));

    assert_eq!(fs::read_to_string(&config.html_output).unwrap(), "previous html");
    assert!(!config.text_output.exists());
}

#[tokio::test]
async fn test_outputs_are_overwritten() {
    let dir = TempDir::new().unwrap();
    let config = write_menu(&dir, SAMPLE_MENU);
    fs::write(&config.html_output, "stale content that is much longer than nothing").unwrap();
    fs::write(&config.text_output, "stale").unwrap();

    convert_menu(&config).await.unwrap();

    assert!(!fs::read_to_string(&config.html_output).unwrap().contains("stale"));
    assert!(!fs::read_to_string(&config.text_output).unwrap().contains("stale"));
}

#[tokio::test]
async fn test_rendering_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let config = write_menu(&dir, SAMPLE_MENU);

    convert_menu(&config).await.unwrap();
    let first_html = fs::read(&config.html_output).unwrap();
    let first_text = fs::read(&config.text_output).unwrap();

    convert_menu(&config).await.unwrap();
    assert_eq!(fs::read(&config.html_output).unwrap(), first_html);
    assert_eq!(fs::read(&config.text_output).unwrap(), first_text);
}

#[tokio::test]
async fn test_crlf_input() {
    let dir = TempDir::new().unwrap();
    let config = write_menu(&dir, &SAMPLE_MENU.replace('\n', "\r\n"));

    convert_menu(&config).await.unwrap();

    let html = fs::read_to_string(&config.html_output).unwrap();
    assert!(html.contains("<td>Yogurt, Dairy, 7am</td>"));
    assert!(!html.contains('\r'));
}
