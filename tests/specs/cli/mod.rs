mod cluster;
mod help;
