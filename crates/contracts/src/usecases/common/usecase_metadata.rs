/// Идентификация сценария в журнале браузера
///
/// Сценарий описывает себя статически; фронтенд пишет эти строки в лог при
/// подключении, чтобы в консоли было видно, какие улучшения активны на странице.
pub trait UseCaseMetadata {
    /// Номер сценария в каталоге, `uNNN`
    fn usecase_index() -> &'static str;

    /// Техническое имя в snake_case
    fn usecase_name() -> &'static str;

    /// Название для пользователя (на русском)
    fn display_name() -> &'static str;

    /// Одна строка о том, что делает сценарий
    fn description() -> &'static str;

    /// Ключ журнала: номер и имя через `_`
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
