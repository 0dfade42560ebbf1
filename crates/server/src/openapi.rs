use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct NewServiceDoc {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    /// free text, conventionally `women` or `men`
    pub gender: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub image: Option<String>,
    pub popular: Option<bool>,
}

#[derive(ToSchema)]
pub struct ServicePatchDoc {
    /// accepted and ignored; the path id always wins
    pub id: Option<u64>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub image: Option<String>,
    pub popular: Option<bool>,
}

#[derive(ToSchema)]
pub struct NewLoyaltyCardDoc {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct LoyaltyCardUpdateDoc {
    pub add_points: Option<u64>,
    pub add_visits: Option<u64>,
    pub add_spent: Option<f64>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::services::list_services,
        crate::routes::services::get_service,
        crate::routes::services::create_service,
        crate::routes::services::update_service,
        crate::routes::services::delete_service,
        crate::routes::categories::list_categories,
        crate::routes::categories::list_subcategories,
        crate::routes::loyalty_cards::list_cards,
        crate::routes::loyalty_cards::get_card,
        crate::routes::loyalty_cards::create_card,
        crate::routes::loyalty_cards::accrue_card,
    ),
    components(
        schemas(
            HealthResponse,
            NewServiceDoc,
            ServicePatchDoc,
            NewLoyaltyCardDoc,
            LoyaltyCardUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "services"),
        (name = "categories"),
        (name = "loyalty")
    )
)]
pub struct ApiDoc;
