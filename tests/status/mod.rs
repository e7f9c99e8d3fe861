mod list_untracked_directories_not_their_contents;
mod list_untracked_files_inside_tracked_directories;
mod print_long_format_before_the_first_commit;
mod print_nothing_when_no_files_are_changed;
mod report_files_with_modified_contents;
mod report_staged_changes_against_head;
mod report_unstaged_files_as_deleted_and_untracked;
