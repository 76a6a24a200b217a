use actix_web::{get, HttpResponse, Responder};

/// Static self-description of the HTTP surface.
#[utoipa::path(
    get,
    path = "/api/docs",
    tag = "docs",
    responses(
        (status = 200, description = "API self-description")
    )
)]
#[get("/api/docs")]
pub async fn api_docs_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "name": "IslamApp API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "API documentation for the IslamApp platform",
        "endpoints": {
            "quran": {
                "/api/quran/surahs": {
                    "method": "GET",
                    "description": "Get list of all surahs in the Quran",
                    "response": "Array of surah objects with basic information"
                },
                "/api/quran/surahs/:number": {
                    "method": "GET",
                    "description": "Get detailed information about a specific surah including all ayahs",
                    "parameters": {
                        "number": "Surah number (1-114)"
                    },
                    "response": "Surah object with ayahs array"
                }
            },
            "prayers": {
                "/api/prayers": {
                    "method": "GET",
                    "description": "Get all available prayers/duas",
                    "response": "Array of prayer objects"
                },
                "/api/prayers/search": {
                    "method": "GET",
                    "description": "Search prayers by title or translation",
                    "parameters": {
                        "q": "Search query string"
                    },
                    "response": "Array of matching prayer objects"
                },
                "/api/prayers/:id": {
                    "method": "GET",
                    "description": "Get a specific prayer by ID",
                    "parameters": {
                        "id": "Prayer ID"
                    },
                    "response": "Prayer object"
                }
            },
            "prayer-times": {
                "/api/prayer-times/city": {
                    "method": "GET",
                    "description": "Get prayer times for a specific city",
                    "parameters": {
                        "city": "City name",
                        "country": "Country name (optional, defaults to Indonesia)"
                    },
                    "response": "Prayer times data for the specified location"
                },
                "/api/prayer-times/coordinates": {
                    "method": "GET",
                    "description": "Get prayer times for specific coordinates",
                    "parameters": {
                        "latitude": "Latitude coordinate",
                        "longitude": "Longitude coordinate"
                    },
                    "response": "Prayer times data for the specified coordinates"
                }
            },
            "calendar": {
                "/api/calendar/hijri/:year/:month": {
                    "method": "GET",
                    "description": "Get Hijri calendar for a specific month and year",
                    "parameters": {
                        "year": "Year (e.g., 1445)",
                        "month": "Month (1-12)"
                    },
                    "response": "Hijri calendar data for the specified month"
                }
            },
            "bookmarks": {
                "/api/bookmarks": {
                    "method": "GET",
                    "description": "Get all bookmarked items (bookmarks are stored client-side)",
                    "response": "Empty bookmark collections"
                }
            }
        }
    }))
}
