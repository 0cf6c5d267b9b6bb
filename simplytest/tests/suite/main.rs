mod mocks;
mod registration;
