pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, movie_builder::*};

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.comment.rating = RatingValue::new(rating);
            self
        }
        pub fn created_at(mut self, ms: i64) -> Self {
            self.comment.created_at = TimestampMs::from_milliseconds(ms);
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: CommentId::new(0),
                    created_at: TimestampMs::from_milliseconds(0),
                    text: String::new(),
                    rating: RatingValue::default(),
                },
            }
        }
    }
}

pub mod movie_builder {

    use super::*;
    use crate::movie::*;
    use time::Date;

    #[derive(Debug)]
    pub struct MovieBuild {
        movie: Movie,
    }

    impl MovieBuild {
        pub fn title(mut self, title: &str) -> Self {
            self.movie.title = title.into();
            self
        }
        pub fn poster_url(mut self, url: Option<&str>) -> Self {
            self.movie.poster_url = url.map(Into::into);
            self
        }
        pub fn overview(mut self, overview: &str) -> Self {
            self.movie.overview = overview.into();
            self
        }
        pub fn release_date(mut self, date: Option<Date>) -> Self {
            self.movie.release_date = date;
            self
        }
        pub fn votes(mut self, average: f64, count: u64) -> Self {
            self.movie.vote_average = average;
            self.movie.vote_count = count;
            self
        }
        pub fn finish(self) -> Movie {
            self.movie
        }
    }

    impl Builder for Movie {
        type Build = MovieBuild;
        fn build() -> MovieBuild {
            MovieBuild {
                movie: Movie {
                    title: String::new(),
                    poster_url: None,
                    overview: String::new(),
                    release_date: None,
                    vote_average: 0.0,
                    vote_count: 0,
                },
            }
        }
    }
}
