//! Разбор строк серверного списка категорий.
//!
//! Глубина вложенности закодирована в подписи категории: каждый уровень
//! добавляет пару символов «—». Родителем может быть только категория
//! верхнего уровня, т.е. подпись без единого маркера.

use super::aggregate::ParentCategoryOption;

pub const NESTING_MARKER: char = '—';

/// Одна строка таблицы результатов, уже извлечённая из DOM
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRow {
    /// Текст ячейки с названием (`None`, если ячейки нет)
    pub name_label: Option<String>,
    /// `data-id` кнопки редактирования (`None`, если кнопки или атрибута нет)
    pub id: Option<String>,
    /// `data-name` кнопки редактирования
    pub name: Option<String>,
}

pub fn nesting_marker_count(label: &str) -> usize {
    label.chars().filter(|c| *c == NESTING_MARKER).count()
}

pub fn is_top_level(label: &str) -> bool {
    nesting_marker_count(label) == 0
}

/// Варианты родительских категорий в порядке строк таблицы.
///
/// Строки без ячейки названия или без идентификатора пропускаются.
pub fn parent_options_from_rows<I>(rows: I) -> Vec<ParentCategoryOption>
where
    I: IntoIterator<Item = ListingRow>,
{
    rows.into_iter()
        .filter_map(|row| {
            let label = row.name_label?;
            let id = row.id.filter(|id| !id.trim().is_empty())?;
            if !is_top_level(&label) {
                return None;
            }
            let display_name = row
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| label.trim().to_string());
            Some(ParentCategoryOption { id, display_name })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, id: &str, name: &str) -> ListingRow {
        ListingRow {
            name_label: Some(label.to_string()),
            id: Some(id.to_string()),
            name: Some(name.to_string()),
        }
    }

    #[test]
    fn test_nesting_markers() {
        assert_eq!(nesting_marker_count("Обувь"), 0);
        assert_eq!(nesting_marker_count("—— Кроссовки"), 2);
        assert_eq!(nesting_marker_count("———— Беговые"), 4);
        assert!(is_top_level("Обувь"));
        assert!(!is_top_level("— Кроссовки"));
    }

    #[test]
    fn test_only_top_level_rows_become_options() {
        let rows = vec![
            row("Обувь", "1", "Обувь"),
            row("—— Кроссовки", "2", "Кроссовки"),
            row("Одежда", "3", "Одежда"),
            row("———— Беговые", "4", "Беговые"),
        ];
        let options = parent_options_from_rows(rows);
        assert_eq!(
            options,
            vec![
                ParentCategoryOption {
                    id: "1".to_string(),
                    display_name: "Обувь".to_string()
                },
                ParentCategoryOption {
                    id: "3".to_string(),
                    display_name: "Одежда".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_single_marker_is_not_top_level() {
        let options = parent_options_from_rows(vec![row("— Полууровень", "9", "Полууровень")]);
        assert!(options.is_empty());
    }

    #[test]
    fn test_rows_without_cell_or_id_are_skipped() {
        let rows = vec![
            ListingRow {
                name_label: None,
                id: Some("1".to_string()),
                name: Some("Без ячейки".to_string()),
            },
            ListingRow {
                name_label: Some("Без кнопки".to_string()),
                id: None,
                name: None,
            },
            ListingRow {
                name_label: Some("Пустой id".to_string()),
                id: Some("  ".to_string()),
                name: Some("Пустой id".to_string()),
            },
        ];
        assert!(parent_options_from_rows(rows).is_empty());
    }

    #[test]
    fn test_missing_data_name_falls_back_to_label() {
        let rows = vec![ListingRow {
            name_label: Some("  Аксессуары \n".to_string()),
            id: Some("5".to_string()),
            name: None,
        }];
        let options = parent_options_from_rows(rows);
        assert_eq!(options[0].display_name, "Аксессуары");
    }
}
