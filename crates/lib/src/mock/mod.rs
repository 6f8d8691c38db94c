pub mod route;
pub mod router;
pub mod server;

pub use route::{ParamDescriptor, ParamsError, RequestBody, Route, RouteTable, ValidationOutcome};
pub use router::{MockRouterLayer, MockRouterService};
pub use server::{MockServer, MockServerBuilder};
