mod form_flow;
mod policies;
