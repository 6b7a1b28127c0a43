use std::sync::Arc;

use classifier::Gateway;

pub type SharedGateway = Arc<dyn Gateway>;
