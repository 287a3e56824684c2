mod fixture;
mod openstep_fixture;
