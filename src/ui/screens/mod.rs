mod connecting;

pub(crate) use connecting::render_connecting;
