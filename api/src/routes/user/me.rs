use actix_web::HttpResponse;

use crate::dto::ProfileResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/user/me
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(ProfileResponse::from(&auth.user))
}
