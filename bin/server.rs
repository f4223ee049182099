// Utility Toolkit - Web Server
// JSON REST API with Axum over the core library

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use utility_toolkit::{
    checksum, colors::ColorList, dates, games, games::GuessingGame, generator, numbers, password,
    patterns, temperature, text, units,
};

/// Shared application state: the only mutable pieces in the system,
/// each behind its own lock (single-writer discipline)
#[derive(Clone)]
struct AppState {
    game: Arc<Mutex<GuessingGame>>,
    colors: Arc<Mutex<ColorList>>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

/// 200 with the computed fields wrapped in the success envelope
fn ok<T: Serialize>(data: T) -> axum::response::Response {
    (StatusCode::OK, Json(ApiResponse::ok(data))).into_response()
}

/// 400 with an `error` message field
fn bad_request(message: impl ToString) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message.to_string() })),
    )
        .into_response()
}

// ============================================================================
// Calculator
// ============================================================================

async fn calc_add(Path((a, b)): Path<(f64, f64)>) -> impl IntoResponse {
    ok(json!({ "operation": "add", "a": a, "b": b, "result": a + b }))
}

async fn calc_subtract(Path((a, b)): Path<(f64, f64)>) -> impl IntoResponse {
    ok(json!({ "operation": "subtract", "a": a, "b": b, "result": a - b }))
}

async fn calc_multiply(Path((a, b)): Path<(f64, f64)>) -> impl IntoResponse {
    ok(json!({ "operation": "multiply", "a": a, "b": b, "result": a * b }))
}

async fn calc_divide(Path((a, b)): Path<(f64, f64)>) -> impl IntoResponse {
    if b == 0.0 {
        return bad_request("Divisor is zero");
    }
    ok(json!({ "operation": "divide", "a": a, "b": b, "result": a / b }))
}

// ============================================================================
// Text
// ============================================================================

// Path segments arrive percent-decoded already; axum's Path extractor
// handles that, so handlers use the extracted value as-is.

async fn text_reverse(Path(input): Path<String>) -> impl IntoResponse {
    ok(json!({ "result": text::reverse(&input) }))
}

async fn text_uppercase(Path(input): Path<String>) -> impl IntoResponse {
    ok(json!({ "result": text::to_uppercase(&input) }))
}

async fn text_lowercase(Path(input): Path<String>) -> impl IntoResponse {
    ok(json!({ "result": text::to_lowercase(&input) }))
}

async fn text_count(Path(input): Path<String>) -> impl IntoResponse {
    let counts = text::count(&input);
    ok(json!({
        "numOfCharacters": counts.characters,
        "numOfWords": counts.words,
        "numOfVowels": counts.vowels,
    }))
}

async fn text_palindrome(Path(input): Path<String>) -> impl IntoResponse {
    ok(json!({ "isPalindrome": text::is_palindrome(&input) }))
}

// ============================================================================
// Numbers
// ============================================================================

async fn numbers_fizzbuzz(Path(count): Path<u32>) -> impl IntoResponse {
    ok(numbers::fizzbuzz(count))
}

async fn numbers_prime(Path(number): Path<i64>) -> impl IntoResponse {
    ok(json!({ "isPrime": numbers::is_prime(number) }))
}

async fn numbers_fibonacci(Path(count): Path<u32>) -> impl IntoResponse {
    ok(json!({ "fibonacci": numbers::fibonacci(count) }))
}

async fn numbers_factors(Path(number): Path<u64>) -> impl IntoResponse {
    ok(json!({ "factors": numbers::factors(number) }))
}

// ============================================================================
// Dates
// ============================================================================

async fn date_today() -> impl IntoResponse {
    let formats = dates::today_formats();
    ok(json!({
        "date1": formats.short,
        "date2": formats.long,
        "date3": formats.month_day,
    }))
}

async fn date_age(Path(birth_year): Path<i32>) -> impl IntoResponse {
    match dates::age_from_birth_year(birth_year) {
        Ok(age) => ok(json!({ "age": age })),
        Err(e) => bad_request(e),
    }
}

async fn date_days_between(Path((date1, date2)): Path<(String, String)>) -> impl IntoResponse {
    match dates::days_between(&date1, &date2) {
        Ok(days) => ok(json!({ "daysBetween": days })),
        Err(e) => bad_request(e),
    }
}

async fn date_weekday(Path(date): Path<String>) -> impl IntoResponse {
    match dates::weekday(&date) {
        Ok(day) => ok(json!({ "weekday": day })),
        Err(e) => bad_request(e),
    }
}

// ============================================================================
// Colors
// ============================================================================

async fn colors_all(State(state): State<AppState>) -> impl IntoResponse {
    let colors = state.colors.lock().unwrap();
    ok(json!({ "colors": colors.all() }))
}

async fn colors_random(State(state): State<AppState>) -> impl IntoResponse {
    let colors = state.colors.lock().unwrap();
    match colors.random() {
        Some(color) => ok(json!({ "color": color })),
        None => bad_request("Color list is empty"),
    }
}

async fn colors_search(
    State(state): State<AppState>,
    Path(letter): Path<char>,
) -> impl IntoResponse {
    let colors = state.colors.lock().unwrap();
    ok(json!({ "colors": colors.search(letter) }))
}

async fn colors_add(State(state): State<AppState>, Path(color): Path<String>) -> impl IntoResponse {
    let mut colors = state.colors.lock().unwrap();
    let updated = colors.add(&color);
    ok(json!({ "colors": updated }))
}

// ============================================================================
// Temperature
// ============================================================================

async fn temp_c_to_f(Path(temp): Path<f64>) -> impl IntoResponse {
    ok(json!({ "celsius": temp, "fahrenheit": temperature::celsius_to_fahrenheit(temp) }))
}

async fn temp_f_to_c(Path(temp): Path<f64>) -> impl IntoResponse {
    ok(json!({ "fahrenheit": temp, "celsius": temperature::fahrenheit_to_celsius(temp) }))
}

async fn temp_k_to_c(Path(temp): Path<f64>) -> impl IntoResponse {
    ok(json!({ "kelvin": temp, "celsius": temperature::kelvin_to_celsius(temp) }))
}

async fn temp_c_to_k(Path(temp): Path<f64>) -> impl IntoResponse {
    ok(json!({ "celsius": temp, "kelvin": temperature::celsius_to_kelvin(temp) }))
}

async fn temp_compare(
    Path((temp1, unit1, temp2, unit2)): Path<(f64, String, f64, String)>,
) -> impl IntoResponse {
    match temperature::compare(temp1, &unit1, temp2, &unit2) {
        Ok(comparison) => ok(json!({
            "temp1": temp1,
            "unit1": unit1,
            "temp2": temp2,
            "unit2": unit2,
            "comparison": comparison.to_string(),
        })),
        Err(e) => bad_request(e),
    }
}

// ============================================================================
// Password generation & strength
// ============================================================================

async fn password_simple(Path(length): Path<usize>) -> impl IntoResponse {
    match generator::simple(length) {
        Ok(pw) => ok(json!({ "password": pw })),
        Err(e) => bad_request(e),
    }
}

async fn password_complex(Path(length): Path<usize>) -> impl IntoResponse {
    match generator::complex(length) {
        Ok(pw) => ok(json!({ "password": pw })),
        Err(e) => bad_request(e),
    }
}

async fn password_memorable(Path(words): Path<String>) -> impl IntoResponse {
    match generator::memorable(&words) {
        Ok(passphrase) => ok(json!({ "passphrase": passphrase })),
        Err(e) => bad_request(e),
    }
}

async fn password_strength(Path(pw): Path<String>) -> impl IntoResponse {
    let strength = password::score(&pw);
    ok(json!({
        "password": pw,
        "strength": strength.label,
        "score": strength.score,
    }))
}

// ============================================================================
// Validators
// ============================================================================

async fn validate_email(Path(email): Path<String>) -> impl IntoResponse {
    ok(json!({ "email": email, "isValid": patterns::is_valid_email(&email) }))
}

async fn validate_phone(Path(phone): Path<String>) -> impl IntoResponse {
    ok(json!({ "phone": phone, "isValid": patterns::is_valid_phone(&phone) }))
}

async fn validate_credit_card(Path(number): Path<String>) -> impl IntoResponse {
    ok(json!({ "creditCardNumber": number, "isValid": checksum::validate(&number) }))
}

async fn validate_strong_password(Path(pw): Path<String>) -> impl IntoResponse {
    let result = password::validate(&pw);
    ok(json!({
        "isStrong": result.is_valid,
        "validationRules": result.violations,
    }))
}

// ============================================================================
// Unit conversion
// ============================================================================

fn conversion_response(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    result: Result<f64, units::ConversionError>,
) -> axum::response::Response {
    match result {
        Ok(converted) => ok(json!({
            "originalValue": value,
            "fromUnit": from_unit,
            "toUnit": to_unit,
            "convertedValue": converted,
        })),
        Err(e) => bad_request(e),
    }
}

async fn convert_length(
    Path((value, from_unit, to_unit)): Path<(f64, String, String)>,
) -> impl IntoResponse {
    conversion_response(
        value,
        &from_unit,
        &to_unit,
        units::convert_length(value, &from_unit, &to_unit),
    )
}

async fn convert_weight(
    Path((value, from_unit, to_unit)): Path<(f64, String, String)>,
) -> impl IntoResponse {
    conversion_response(
        value,
        &from_unit,
        &to_unit,
        units::convert_weight(value, &from_unit, &to_unit),
    )
}

async fn convert_volume(
    Path((value, from_unit, to_unit)): Path<(f64, String, String)>,
) -> impl IntoResponse {
    conversion_response(
        value,
        &from_unit,
        &to_unit,
        units::convert_volume(value, &from_unit, &to_unit),
    )
}

async fn convert_list_units(Path(domain): Path<String>) -> impl IntoResponse {
    match units::list_units(&domain) {
        Ok(list) => ok(json!({ "type": domain, "units": list })),
        Err(e) => bad_request(e),
    }
}

// ============================================================================
// Games
// ============================================================================

async fn game_guess(State(state): State<AppState>, Path(guess): Path<u32>) -> impl IntoResponse {
    let mut game = state.game.lock().unwrap();
    match game.guess(guess) {
        games::GuessOutcome::Correct {
            number,
            total_attempts,
        } => ok(json!({
            "message": format!("You got the right number! The number was {}.", number),
            "totalAttempts": total_attempts,
        })),
        games::GuessOutcome::TooLow { attempts } => {
            ok(json!({ "message": "The number is higher.", "attempts": attempts }))
        }
        games::GuessOutcome::TooHigh { attempts } => {
            ok(json!({ "message": "The number is lower.", "attempts": attempts }))
        }
    }
}

async fn game_rps(Path(choice): Path<String>) -> impl IntoResponse {
    match games::rock_paper_scissors(&choice) {
        Ok(round) => ok(json!({
            "yourChoice": round.your_choice,
            "computerChoice": round.computer_choice,
            "message": round.message,
        })),
        Err(e) => bad_request(e),
    }
}

async fn game_dice(Path((sides, count)): Path<(u32, u32)>) -> impl IntoResponse {
    match games::roll_dice(sides, count) {
        Ok(rolls) => ok(json!({ "numSides": sides, "numDies": count, "rolls": rolls })),
        Err(e) => bad_request(e),
    }
}

async fn game_coin_flip(Path(count): Path<u32>) -> impl IntoResponse {
    match games::flip_coins(count) {
        Ok(flips) => {
            let flips: Vec<String> = flips.iter().map(|f| f.to_string()).collect();
            ok(json!({ "count": count, "allFlips": flips }))
        }
        Err(e) => bad_request(e),
    }
}

// ============================================================================
// Health
// ============================================================================

/// GET /health - Health check
async fn health_check() -> impl IntoResponse {
    ok(json!({ "status": "OK", "version": utility_toolkit::VERSION }))
}

// ============================================================================
// Main Server
// ============================================================================

fn build_router(state: AppState) -> Router {
    let calculator = Router::new()
        .route("/add/:a/:b", get(calc_add))
        .route("/subtract/:a/:b", get(calc_subtract))
        .route("/multiply/:a/:b", get(calc_multiply))
        .route("/divide/:a/:b", get(calc_divide));

    let text_routes = Router::new()
        .route("/reverse/:text", get(text_reverse))
        .route("/uppercase/:text", get(text_uppercase))
        .route("/lowercase/:text", get(text_lowercase))
        .route("/count/:text", get(text_count))
        .route("/palindrome/:text", get(text_palindrome));

    let number_routes = Router::new()
        .route("/fizzbuzz/:count", get(numbers_fizzbuzz))
        .route("/prime/:number", get(numbers_prime))
        .route("/fibonacci/:count", get(numbers_fibonacci))
        .route("/factors/:number", get(numbers_factors));

    let date_routes = Router::new()
        .route("/today", get(date_today))
        .route("/age/:birth_year", get(date_age))
        .route("/daysbetween/:date1/:date2", get(date_days_between))
        .route("/weekday/:date", get(date_weekday));

    // Nested "/" does not match the bare prefix, so /colors itself is
    // registered on the main router below
    let color_routes = Router::new()
        .route("/random", get(colors_random))
        .route("/search/:letter", get(colors_search))
        .route("/add/:color", post(colors_add));

    let temp_routes = Router::new()
        .route("/celsius-to-fahrenheit/:temp", get(temp_c_to_f))
        .route("/fahrenheit-to-celsius/:temp", get(temp_f_to_c))
        .route("/kelvin-to-celsius/:temp", get(temp_k_to_c))
        .route("/celsius-to-kelvin/:temp", get(temp_c_to_k))
        .route("/compare/:temp1/:unit1/:temp2/:unit2", get(temp_compare));

    let password_routes = Router::new()
        .route("/simple/:length", get(password_simple))
        .route("/complex/:length", get(password_complex))
        .route("/memorable/:words", get(password_memorable))
        .route("/strength/:password", get(password_strength));

    let validate_routes = Router::new()
        .route("/email/:email", get(validate_email))
        .route("/phone/:phone", get(validate_phone))
        .route("/creditcard/:number", get(validate_credit_card))
        .route("/strongpassword/:password", get(validate_strong_password));

    let convert_routes = Router::new()
        .route("/length/:value/:from_unit/:to_unit", get(convert_length))
        .route("/weight/:value/:from_unit/:to_unit", get(convert_weight))
        .route("/volume/:value/:from_unit/:to_unit", get(convert_volume))
        .route("/list-units/:domain", get(convert_list_units));

    let game_routes = Router::new()
        .route("/guess-number/:guess", post(game_guess))
        .route("/rock-paper-scissors/:choice", get(game_rps))
        .route("/dice/:sides/:count", get(game_dice))
        .route("/coin-flip/:count", get(game_coin_flip));

    Router::new()
        .route("/health", get(health_check))
        .nest("/calculator", calculator)
        .nest("/text", text_routes)
        .nest("/numbers", number_routes)
        .nest("/date", date_routes)
        .route("/colors", get(colors_all))
        .nest("/colors", color_routes)
        .nest("/temp", temp_routes)
        .nest("/password", password_routes)
        .nest("/validate", validate_routes)
        .nest("/convert", convert_routes)
        .nest("/game", game_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    println!("🧰 Utility Toolkit - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let state = AppState {
        game: Arc::new(Mutex::new(GuessingGame::new())),
        colors: Arc::new(Mutex::new(ColorList::new())),
    };

    let app = build_router(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://{}", addr);
    println!("   Try: http://{}/convert/length/100/feet/meters", addr);
    println!("   Try: http://{}/validate/creditcard/4532015112830366", addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_router(AppState {
            game: Arc::new(Mutex::new(GuessingGame::new())),
            colors: Arc::new(Mutex::new(ColorList::new())),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_text_reverse_decodes_percent_escapes_once() {
        // %2541 is a percent-encoded "%41": the extractor decodes it once,
        // so the handler sees the literal "%41", not "A"
        let (status, body) = get_json("/text/reverse/%2541").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["result"], "14%");
    }

    #[tokio::test]
    async fn test_fibonacci_route_survives_large_count() {
        let (status, body) = get_json("/numbers/fibonacci/94").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["fibonacci"].as_array().unwrap().len(), 93);
    }

    #[tokio::test]
    async fn test_convert_unknown_unit_is_bad_request() {
        let (status, body) = get_json("/convert/length/1/yards/meters").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("yards"));
    }
}
