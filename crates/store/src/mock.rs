//! Simulated backend for tests/dev.
//!
//! Serves the fixed demo payloads behind a configurable delay so the console
//! behaves as it would against the real service. One account exists per
//! role, all authenticated by an exact email+password match.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use cephas_auth::{Role, User};
use cephas_core::{DashboardStats, EntityId, Record};
use cephas_session::{AuthError, Authenticator, LoginGrant};

use crate::client::{DataClient, FetchError, FetchScope};
use crate::collection::CollectionName;

/// Default simulated network latency.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Canned-payload backend implementing both collaborator traits.
pub struct MockBackend {
    delay: Duration,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// No simulated latency; for tests.
    pub fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Authenticator for MockBackend {
    async fn login(&self, email: &str, password: &str) -> Result<LoginGrant, AuthError> {
        self.simulate_latency().await;

        if password != "password" {
            return Err(AuthError::InvalidCredentials);
        }
        let (id, name, role) = match email {
            "admin@cephas.com" => (1, "Admin User", Role::SuperAdmin),
            "supervisor@cephas.com" => (2, "Supervisor User", Role::Supervisor),
            "installer@cephas.com" => (3, "Installer User", Role::Installer),
            "accountant@cephas.com" => (4, "Accountant User", Role::Accountant),
            "warehouse@cephas.com" => (5, "Warehouse User", Role::Warehouse),
            _ => return Err(AuthError::InvalidCredentials),
        };

        Ok(LoginGrant {
            token: format!("mock-jwt-token-for-{role}"),
            user: User {
                id: EntityId::new(id),
                name: name.to_string(),
                email: email.to_string(),
                role,
            },
        })
    }
}

#[async_trait]
impl DataClient for MockBackend {
    async fn fetch_collection(
        &self,
        collection: CollectionName,
        scope: FetchScope,
    ) -> Result<Vec<Record>, FetchError> {
        self.simulate_latency().await;
        records_from(canned_payload(collection, scope))
    }

    async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, FetchError> {
        self.simulate_latency().await;
        serde_json::from_value(json!({
            "today": {
                "activations": 16,
                "modifications": 4,
                "assurances": 6,
                "totalJobs": 28,
                "assignedJobs": 6,
                "unassignedJobs": 23
            },
            "tomorrow": {
                "activations": 8,
                "modifications": 4,
                "assurances": 2,
                "totalJobs": 15,
                "assignedJobs": 0,
                "unassignedJobs": 16
            },
            "future": {
                "activations": 69,
                "modifications": 14,
                "assurances": 2,
                "totalJobs": 88,
                "assignedJobs": 0,
                "unassignedJobs": 88
            }
        }))
        .map_err(|err| FetchError::Backend(err.to_string()))
    }
}

fn records_from(payload: Value) -> Result<Vec<Record>, FetchError> {
    serde_json::from_value(payload).map_err(|err| FetchError::Backend(err.to_string()))
}

/// The demo payloads, verbatim from the reference environment — including
/// its mixed status spellings (`NOT COMPLETED` vs `NOT_COMPLETED`), which
/// are preserved rather than normalized.
fn canned_payload(collection: CollectionName, scope: FetchScope) -> Value {
    if let FetchScope::AssignedTo(_) = scope {
        match collection {
            CollectionName::Activations => {
                return json!([
                    {
                        "id": 1,
                        "trbnNo": "TBBNA870523G",
                        "name": "TAN PUI YEE",
                        "contactNo": "017-3781691",
                        "building": "SOLARIS PARQ RESIDENSI",
                        "status": "ASSIGNED",
                        "appointmentDate": "Mar 29, 2025 10:00 AM",
                        "orderType": "ACTIVATION"
                    }
                ]);
            }
            CollectionName::Assurances => {
                return json!([
                    {
                        "id": 1,
                        "trbnNo": "TBBNA578554G",
                        "ticketNumber": "TTKT202503248410309",
                        "awoNo": "AWO390312",
                        "name": "ZHENG ZILONG",
                        "contactNo": "017-5216863",
                        "building": "9 SEPUTEH - VIVO RESIDENCE",
                        "status": "ASSIGNED",
                        "appointmentDate": "Mar 29, 2025 1:00 PM"
                    }
                ]);
            }
            CollectionName::Materials => {
                return json!([
                    {
                        "id": 1,
                        "sapCode": "CAE-000-0820",
                        "description": "Huawei HG8145X6",
                        "serialNo": "HW1234567890",
                        "assignedDate": "Mar 27, 2025",
                        "jobId": "TBBNA870523G"
                    }
                ]);
            }
            // Other collections have no installer-scoped slice.
            _ => {}
        }
    }

    match collection {
        CollectionName::Buildings => json!([
            { "id": 1, "name": "KELANA IMPIAN APARTMENT", "location": "Kuala Lumpur", "type": "Non Prelaid" },
            { "id": 2, "name": "THE WESTSIDE II", "location": "Kuala Lumpur", "type": "Prelaid" },
            { "id": 3, "name": "THE WESTSIDE I", "location": "Kuala Lumpur", "type": "Prelaid" },
            { "id": 4, "name": "TARA 33", "location": "Kuala Lumpur", "type": "Non Prelaid" },
            { "id": 5, "name": "LUMI TROPICANA", "location": "Kuala Lumpur", "type": "Prelaid" }
        ]),
        CollectionName::Activations => json!([
            {
                "id": 1,
                "trbnNo": "TBBNA870523G",
                "name": "TAN PUI YEE",
                "contactNo": "017-3781691 / 60173781691",
                "serviceInstaller": "-",
                "building": "SOLARIS PARQ RESIDENSI",
                "status": "NOT COMPLETED",
                "appointmentDate": "May 10, 2025 10:00 AM",
                "orderType": "ACTIVATION",
                "orderSubType": "RESCHEDULE"
            },
            {
                "id": 2,
                "trbnNo": "TBBNA872851G",
                "name": "CHOY YUEN LENG",
                "contactNo": "012-2239707 / 0122539707",
                "serviceInstaller": "-",
                "building": "RESIDENSI M LUNA",
                "status": "NOT COMPLETED",
                "appointmentDate": "May 3, 2025 10:00 AM",
                "orderType": "ACTIVATION",
                "orderSubType": "N/A"
            }
        ]),
        CollectionName::Assurances => json!([
            {
                "id": 1,
                "trbnNo": "TBBNA578554G",
                "ticketNumber": "TTKT202503248410309",
                "awoNo": "AWO390312",
                "name": "ZHENG ZILONG",
                "contactNo": "017-5216863",
                "serviceInstaller": "-",
                "building": "9 SEPUTEH - VIVO RESIDENCE",
                "status": "NOT_COMPLETED",
                "remarks": "-",
                "appointmentDate": "Apr 2, 2025 1:00 PM",
                "recDate": "Mar 17, 2025 6:55 PM"
            },
            {
                "id": 2,
                "trbnNo": "TBBNA13194G",
                "ticketNumber": "TTKT202503178405332",
                "awoNo": "AWO389109",
                "name": "THEIVESREE RAJENDRAN",
                "contactNo": "60177145536",
                "serviceInstaller": "-",
                "building": "ARMANEE CONDOMINIUM",
                "status": "NOT_COMPLETED",
                "remarks": "-",
                "appointmentDate": "Apr 2, 2025 11:00 AM",
                "recDate": "Mar 17, 2025 6:55 PM"
            }
        ]),
        CollectionName::Splitters => json!([
            {
                "id": 1,
                "serviceId": "TBBNA422113G",
                "buildingName": "THE WESTSIDE I",
                "alias": "",
                "splitterLevel": "MDF ROOM - PARKING",
                "splitterNumber": "02",
                "splitterPort": "25"
            },
            {
                "id": 2,
                "serviceId": "TBBNA287810G",
                "buildingName": "KELANA PUTERI",
                "alias": "",
                "splitterLevel": "10",
                "splitterNumber": "10",
                "splitterPort": "22"
            }
        ]),
        CollectionName::Materials => json!([
            { "id": 1, "sapCode": "CAE-000-0820", "description": "Huawei HG8145X6", "stockKeepingUnit": -3788 },
            { "id": 2, "sapCode": "CAE-000-0780", "description": "Huawei HG8145V5", "stockKeepingUnit": -97 },
            { "id": 3, "sapCode": "CAE-000-0830", "description": "Huawei HN8245X6s-8N-30 (2GB)", "stockKeepingUnit": -35 },
            { "id": 4, "sapCode": "CAE-000-0770", "description": "Huawei WA8021V5", "stockKeepingUnit": -230 },
            { "id": 5, "sapCode": "CAE-000-0760", "description": "TP-Link HC420", "stockKeepingUnit": 0 }
        ]),
        CollectionName::ServiceInstallers => json!([
            { "id": 1, "name": "K. MARIAPPAN A/L KUPPATHAN @ KM Siva", "contactNo": "+60 17-676 7625" },
            { "id": 2, "name": "SARAVANAN A/L I. CHINNIAH @ Solo", "contactNo": "+60 16-392 3026" },
            { "id": 3, "name": "MUNIANDY A/L SOORINARAYANAN @ Mani", "contactNo": "+60 16-319 8867" },
            { "id": 4, "name": "YELLESHUA JEEVAN A/L AROKKIASAMY @ Jeevan", "contactNo": "+60 16-453 2305" },
            { "id": 5, "name": "RAVEEN NAIR A/L K RAHMAN @ Raveen", "contactNo": "+60 11-1081 8049" }
        ]),
        CollectionName::Orders => json!([
            {
                "id": 1,
                "tbbnoId": "0327015981 / 0327015980/ 0327015982 / 0327015983",
                "name": "BADAN PENGURUSAN BERSAMA PUSAT PERDAGANGAN BERPADU & RES",
                "email": "",
                "address": "BLOCK A, LEVEL 7, UNIT MANAGEMENT",
                "contactNo": "0392129733 Olivia / MS NURUL @ 0322459013"
            },
            {
                "id": 2,
                "tbbnoId": "TBBNB8358G",
                "name": "OW WAI SIONG",
                "email": "",
                "address": "BLOCK C LEVEL 27 UNIT 02, UNITED POINT RESIDENCE- BLOCK C",
                "contactNo": "014-3280280 / 0146266838"
            }
        ]),
        CollectionName::Invoices => json!([
            {
                "id": 1,
                "invoiceNumber": "GPON25/03/515",
                "submissionNumber": "-",
                "customer": "RUPESH A/L MUNIANDY",
                "date": "Mar 27, 2025",
                "totalAmount": "RM 150.00",
                "description": "Prelaid Activation",
                "paid": "No",
                "createdBy": "Cephas Admin"
            },
            {
                "id": 2,
                "invoiceNumber": "GPON25/03/514",
                "submissionNumber": "-",
                "customer": "KEN CITY DEVELOPMENT SDN BHD",
                "date": "Mar 27, 2025",
                "totalAmount": "RM 150.00",
                "description": "Prelaid Activation",
                "paid": "No",
                "createdBy": "Cephas Admin"
            }
        ]),
    }
}
