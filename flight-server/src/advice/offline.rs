//! Offline travel-advice knowledge base.
//!
//! Serves a fixed set of well-travelled cities when no API key is
//! configured, keyed by destination substring and question topic.

/// Per-city advice entries: (city, food, packing, sightseeing).
const KNOWLEDGE: &[(&str, &str, &str, &str)] = &[
    (
        "London",
        "Try fish and chips at a local pub, a curry on Brick Lane, and the \
         street food at Borough Market.",
        "Bring a raincoat (the weather is unpredictable), comfortable \
         walking shoes, and layers.",
        "The British Museum is free; add the Tower of London and a walk \
         along the South Bank.",
    ),
    (
        "Mumbai",
        "Try vada pav from a street stall, pav bhaji at Juhu Beach, and \
         Parsi food at an Irani cafe.",
        "Light cotton clothes for the humidity, sunglasses, and sandals.",
        "Gateway of India, Marine Drive at sunset, and the Elephanta \
         Caves.",
    ),
    (
        "New York",
        "Grab a dollar slice, a bagel with lox for breakfast, and a plate \
         from a halal street cart.",
        "Good walking shoes are mandatory; in winter bring a heavy coat.",
        "Central Park, The Met, and a walk on the High Line.",
    ),
    (
        "Paris",
        "Croissants for breakfast, steak frites for dinner, and macarons \
         from a proper patisserie.",
        "A stylish but comfortable outfit; Parisians dress up a little.",
        "The Eiffel Tower at night, the Louvre, and Montmartre.",
    ),
];

/// Answer a question about a destination from the knowledge base.
///
/// The destination is matched by case-insensitive substring against the
/// known cities; the question is routed by topic keywords. Unknown
/// destinations get a notice explaining how to unlock live answers.
pub fn offline_advice(destination: &str, question: &str) -> String {
    let city_name = destination.split(',').next().unwrap_or(destination).trim();
    let city_lower = city_name.to_lowercase();

    let entry = KNOWLEDGE
        .iter()
        .find(|(city, _, _, _)| city_lower.contains(&city.to_lowercase()));

    if let Some((city, food, pack, visit)) = entry {
        let q = question.to_lowercase();
        if q.contains("eat") || q.contains("food") {
            return format!("{city} eats: {food}");
        }
        if q.contains("pack") || q.contains("wear") {
            return format!("Packing for {city}: {pack}");
        }
        if q.contains("visit") || q.contains("do") || q.contains("see") {
            return format!("Must do in {city}: {visit}");
        }
    }

    format!(
        "Offline mode: no local data for {city_name}. Configure an advice \
         API key to unlock live answers."
    )
}
