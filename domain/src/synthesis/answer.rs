//! Templated reply built from flattened search results.

use super::text::clean_text;
use crate::locale::Locale;
use crate::search::entities::Topic;

/// Number of snippets quoted in the overview block
pub const OVERVIEW_ITEMS: usize = 3;

/// Build the reply text for `query` from its flattened topics.
///
/// With no topics the reply is a fixed "nothing found" message naming the
/// query. Otherwise it is a numbered overview of the first
/// [`OVERVIEW_ITEMS`] cleaned snippets followed by a trailer that depends on
/// whether more topics were found than quoted.
pub fn craft_answer(query: &str, topics: &[Topic], locale: Locale) -> String {
    if topics.is_empty() {
        return no_results(query, locale);
    }

    let items = topics
        .iter()
        .take(OVERVIEW_ITEMS)
        .enumerate()
        .map(|(index, topic)| format!("{}. {}", index + 1, clean_text(&topic.text)))
        .collect::<Vec<_>>()
        .join("\n");

    let overview = format!("{}\n\n{}", overview_header(query, locale), items);
    let trailer = trailer(topics.len() > OVERVIEW_ITEMS, locale);

    format!("{overview}\n\n{trailer}")
}

fn no_results(query: &str, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "I couldn't find fresh results for «{query}». \
             Try refining it, adding context or specific keywords."
        ),
        Locale::Ru => format!(
            "Я не нашёл свежих результатов по запросу «{query}». \
             Попробуй уточнить, добавить контекст или конкретные ключевые слова."
        ),
    }
}

fn overview_header(query: &str, locale: Locale) -> String {
    match locale {
        Locale::En => format!("Here's what I gathered on «{query}»:"),
        Locale::Ru => format!("Вот что удалось собрать по теме «{query}»:"),
    }
}

fn trailer(has_more: bool, locale: Locale) -> &'static str {
    match (locale, has_more) {
        (Locale::En, true) => {
            "I kept a few more links in the sources block so you can dig deeper."
        }
        (Locale::En, false) => {
            "All the signals I found are already built into the answer and listed below."
        }
        (Locale::Ru, true) => {
            "Дополнительно я сохранил ещё несколько ссылок в блоке источников, чтобы можно было углубиться."
        }
        (Locale::Ru, false) => "Все найденные сигналы уже встроены в ответ и перечислены ниже.",
    }
}
