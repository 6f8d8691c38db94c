// Mock Server Integration Tests
//
// TESTS: Mock node behaviour over real HTTP
//        - Routing (canned responses, subtree patterns, 404 fallback)
//        - Request validation (body presence, required params, literal params)
//        - SDK client pointed at the mock by URL injection
//        - Lifecycle (teardown, bounded lifetime, concurrent requests)

mod client_integration;
mod lifecycle;
mod routing;
